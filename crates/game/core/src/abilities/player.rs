//! Player-side ability scripts, both slots, keyed by identity.
//!
//! Targets are resolved interactively. Every script pre-checks SP and
//! deducts it before doing anything else; a short purse skips the script
//! but still consumes the combatant's turn.

use super::{BUFF_POOL, DEBUFF_POOL, afford, chosen_index, random_index};
use crate::combat::{attack_delta, heal_delta};
use crate::config::GameConfig;
use crate::engine::{Controller, EngineError};
use crate::env::GameRng;
use crate::state::{EffectKind, Identity, Roster};

/// Executes the caster's first ability slot.
pub fn cast_slot_one(
    caster: usize,
    party: &mut Roster,
    enemies: &mut Roster,
    rng: &mut GameRng,
    config: &GameConfig,
    ctrl: &mut dyn Controller,
) -> Result<(), EngineError> {
    match party[caster].identity() {
        Identity::Default => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let delta = attack_delta(-3, &party[caster], &enemies[target]);
            enemies[target].change_hp(delta);
        }
        Identity::Leafy => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            let delta = heal_delta(2, &party[target]);
            party[target].change_hp(delta);
            party[target].remove_first(EffectKind::Fire);
        }
        Identity::Doombringer => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let delta = attack_delta(-3, &party[caster], &enemies[target]);
            enemies[target].change_hp(delta);
            enemies[target].attach(EffectKind::Stun, 1);
        }
        Identity::Cyan => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            for target in enemies.living_indices() {
                let delta = attack_delta(-1, &party[caster], &enemies[target]);
                enemies[target].change_hp(delta);
                if rng.chance(50) {
                    enemies[target].attach(EffectKind::Bleed, 2);
                }
            }
        }
        Identity::JaneDoe => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            let delta = heal_delta(5, &party[target]);
            party[target].change_hp(delta);
        }
        Identity::Onyx => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            enemies[target].attach(EffectKind::Fire, 3);
        }
        Identity::Viper => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let delta = attack_delta(-1, &party[caster], &enemies[target]);
            enemies[target].change_hp(delta);
            enemies[target].attach(EffectKind::Poison, 2);
        }
        Identity::Agent007n7 => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            for target in enemies.living_indices() {
                let delta = attack_delta(-1, &party[caster], &enemies[target]);
                enemies[target].change_hp(delta);
            }
        }
        Identity::Tasque => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let kind = *rng.pick(&DEBUFF_POOL);
            enemies[target].attach(kind, 2);
        }
        Identity::Isaac => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            party[caster].attach(EffectKind::Tough, 2);
            party[caster].attach(EffectKind::Strong, 2);
        }
        Identity::JohnDoe => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            for target in enemies.living_indices() {
                let delta = attack_delta(-1, &party[caster], &enemies[target]);
                enemies[target].change_hp(delta);
            }
            // The shockwave hits his own side too, caster included.
            for target in party.living_indices() {
                let delta = attack_delta(-1, &party[caster], &party[target]);
                party[target].change_hp(delta);
            }
        }
        Identity::Flutter => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            party[target].attach(EffectKind::Dodgy, 2);
        }
        Identity::Chance => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let rolled = rng.range_inclusive(config.reroll_min, config.reroll_max);
            party[caster].set_max_hp(rolled);
        }
    }
    Ok(())
}

/// Executes the caster's second ability slot.
pub fn cast_slot_two(
    caster: usize,
    party: &mut Roster,
    enemies: &mut Roster,
    rng: &mut GameRng,
    _config: &GameConfig,
    ctrl: &mut dyn Controller,
) -> Result<(), EngineError> {
    match party[caster].identity() {
        Identity::Default => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            let delta = heal_delta(3, &party[target]);
            party[target].change_hp(delta);
        }
        Identity::Leafy => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            party[caster].attach(EffectKind::Nullify, 1);
        }
        Identity::Doombringer => {
            if !afford(&mut party[caster], 3)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let delta = attack_delta(-5, &party[caster], &enemies[target]);
            enemies[target].change_hp(delta);
        }
        Identity::Cyan => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            party[caster].attach(EffectKind::Dodgy, 3);
        }
        Identity::JaneDoe => {
            // Free: trades the action for 1 SP.
            party[caster].change_sp(1)?;
        }
        Identity::Onyx => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let burning = super::total_effects(enemies, EffectKind::Fire);
            for target in party.living_indices() {
                let delta = heal_delta(burning, &party[target]);
                party[target].change_hp(delta);
            }
        }
        Identity::Viper => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let venom = super::total_effects(enemies, EffectKind::Poison);
            let target = chosen_index(ctrl, enemies)?;
            // Raw delta: poison feedback ignores the resolution rules.
            enemies[target].change_hp(-venom);
        }
        Identity::Agent007n7 => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            for target in party.living_indices() {
                let delta = heal_delta(3, &party[target]);
                party[target].change_hp(delta);
            }
        }
        Identity::Tasque => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            let kind = *rng.pick(&BUFF_POOL);
            party[target].attach(kind, 2);
        }
        Identity::Isaac => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, party)?;
            party[target].attach(EffectKind::Tough, 3);
        }
        Identity::JohnDoe => {
            if !afford(&mut party[caster], 2)? {
                return Ok(());
            }
            let target = chosen_index(ctrl, enemies)?;
            let delta = attack_delta(-4, &party[caster], &enemies[target]);
            enemies[target].change_hp(delta);
        }
        Identity::Flutter => {
            if !afford(&mut party[caster], 4)? {
                return Ok(());
            }
            for target in party.living_indices() {
                party[target].attach(EffectKind::Nullify, 1);
            }
        }
        Identity::Chance => {
            if !afford(&mut party[caster], 1)? {
                return Ok(());
            }
            if rng.chance(50) {
                // Backfire, unmitigated.
                party[caster].change_hp(-3);
            } else if let Some(target) = random_index(rng, enemies) {
                let delta = attack_delta(-6, &party[caster], &enemies[target]);
                enemies[target].change_hp(delta);
            }
        }
    }
    Ok(())
}
