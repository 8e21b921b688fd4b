//! Per-identity ability scripts and targeting.
//!
//! Each identity has two fixed scripts per side. Player scripts resolve
//! their targets interactively through the [`Controller`]; enemy scripts
//! pick uniformly among living targets. Dispatch is keyed on
//! [`crate::state::Identity`], never on a display string.

pub mod enemy;
pub mod player;

use crate::combat::attack_delta;
use crate::engine::{Controller, EngineError};
use crate::env::GameRng;
use crate::state::{CombatError, Combatant, EffectKind, Roster};

/// Debuff families Tasque (and the synergy table) rolls from, in roll order.
pub(crate) const DEBUFF_POOL: [EffectKind; 4] = [
    EffectKind::Fire,
    EffectKind::Poison,
    EffectKind::Stun,
    EffectKind::Bleed,
];

/// Buff families Tasque rolls from, in roll order.
pub(crate) const BUFF_POOL: [EffectKind; 4] = [
    EffectKind::Pure,
    EffectKind::Dodgy,
    EffectKind::Tough,
    EffectKind::Strong,
];

/// Deducts `cost` SP if the actor can pay it. Returns false (skipping the
/// whole script) when SP is short; the turn is still consumed.
pub(crate) fn afford(actor: &mut Combatant, cost: i32) -> Result<bool, CombatError> {
    if actor.sp() < cost {
        return Ok(false);
    }
    actor.change_sp(-cost)?;
    Ok(true)
}

/// Interactive target resolution: asks the controller for names until one
/// matches a living member of `candidates`.
pub(crate) fn chosen_index(
    ctrl: &mut dyn Controller,
    candidates: &Roster,
) -> Result<usize, EngineError> {
    loop {
        let name = ctrl.target_name(candidates)?;
        if let Some(index) = candidates.living_index_by_name(&name) {
            return Ok(index);
        }
        ctrl.note("Nobody alive goes by that name.");
    }
}

/// Uniform pick among living members. None when the roster has none.
pub(crate) fn random_index(rng: &mut GameRng, candidates: &Roster) -> Option<usize> {
    let living = candidates.living_indices();
    if living.is_empty() {
        return None;
    }
    Some(living[rng.below(living.len() as u32) as usize])
}

/// The universal fallback action: a −1 hit through the shared resolution
/// rules.
pub fn basic_attack(
    attacker_side: &Roster,
    attacker: usize,
    foes: &mut Roster,
    target: usize,
) {
    let delta = attack_delta(-1, &attacker_side[attacker], &foes[target]);
    foes[target].change_hp(delta);
}

/// Total attached effects of one family across a roster's living members.
pub(crate) fn total_effects(roster: &Roster, kind: EffectKind) -> i32 {
    roster
        .living()
        .map(|c| c.effects().iter().filter(|e| e.kind == kind).count() as i32)
        .sum()
}
