//! Shared damage and healing adjustment rules.
//!
//! Every scripted attack funnels its base delta through [`attack_delta`]
//! and every heal through [`heal_delta`], so defensive effects behave the
//! same no matter which ability produced the number. Abilities that bypass
//! these rules (raw deltas) call [`crate::state::Combatant::change_hp`]
//! directly.

use crate::state::{Combatant, EffectKind};

/// Adjusts a (negative) attack delta for attacker and target effects.
///
/// Order matters and matches the battle rules exactly:
/// 1. An attacker with at least one Strong deepens the delta by 1 (once).
/// 2. The target's effect list is walked in insertion order: the first
///    Nullify forces the delta to 0 and stops; every Tough seen before
///    that softens the delta by 1.
///
/// Tough softening is unbounded, so a heavily toughened target can turn a
/// weak hit into a heal.
pub fn attack_delta(base: i32, attacker: &Combatant, target: &Combatant) -> i32 {
    let mut delta = base;
    if attacker.has_effect(EffectKind::Strong) {
        delta -= 1;
    }
    for effect in target.effects() {
        match effect.kind {
            EffectKind::Nullify => return 0,
            EffectKind::Tough => delta += 1,
            _ => {}
        }
    }
    delta
}

/// Adjusts a (positive) healing delta for the target's effects: a bleeding
/// target receives nothing.
pub fn heal_delta(base: i32, target: &Combatant) -> i32 {
    if target.has_effect(EffectKind::Bleed) { 0 } else { base }
}
