//! Enemy-side ability scripts, both slots.
//!
//! Same scripts as the player tables with every chosen target replaced by
//! a uniform random living one, except where noted. `allies` is the
//! caster's own roster, `foes` the player party.

use super::{BUFF_POOL, DEBUFF_POOL, afford, random_index, total_effects};
use crate::combat::{attack_delta, heal_delta};
use crate::config::GameConfig;
use crate::env::GameRng;
use crate::state::{CombatError, EffectKind, Identity, Roster};

/// Executes the caster's first ability slot.
pub fn cast_slot_one(
    caster: usize,
    allies: &mut Roster,
    foes: &mut Roster,
    rng: &mut GameRng,
    config: &GameConfig,
) -> Result<(), CombatError> {
    match allies[caster].identity() {
        Identity::Default => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-3, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
        }
        Identity::Leafy => {
            // Diverges from the player script: tends a random member of its
            // own side and scrubs every effect off them.
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                let delta = heal_delta(2, &allies[target]);
                allies[target].clear_effects();
                allies[target].change_hp(delta);
            }
        }
        Identity::Doombringer => {
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-3, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
                foes[target].attach(EffectKind::Stun, 1);
            }
        }
        Identity::Cyan => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            for target in foes.living_indices() {
                let delta = attack_delta(-1, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
                if rng.chance(50) {
                    foes[target].attach(EffectKind::Bleed, 2);
                }
            }
        }
        Identity::JaneDoe => {
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                let delta = heal_delta(5, &allies[target]);
                allies[target].change_hp(delta);
            }
        }
        Identity::Onyx => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                foes[target].attach(EffectKind::Fire, 3);
            }
        }
        Identity::Viper => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-1, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
                foes[target].attach(EffectKind::Poison, 2);
            }
        }
        Identity::Agent007n7 => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            for target in foes.living_indices() {
                let delta = attack_delta(-1, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
        }
        Identity::Tasque => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let kind = *rng.pick(&DEBUFF_POOL);
                foes[target].attach(kind, 2);
            }
        }
        Identity::Isaac => {
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            allies[caster].attach(EffectKind::Tough, 2);
            allies[caster].attach(EffectKind::Strong, 2);
        }
        Identity::JohnDoe => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            for target in foes.living_indices() {
                let delta = attack_delta(-1, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
            for target in allies.living_indices() {
                let delta = attack_delta(-1, &allies[caster], &allies[target]);
                allies[target].change_hp(delta);
            }
        }
        Identity::Flutter => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                allies[target].attach(EffectKind::Dodgy, 2);
            }
        }
        Identity::Chance => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            let rolled = rng.range_inclusive(config.reroll_min, config.reroll_max);
            allies[caster].set_max_hp(rolled);
        }
    }
    Ok(())
}

/// Executes the caster's second ability slot.
pub fn cast_slot_two(
    caster: usize,
    allies: &mut Roster,
    foes: &mut Roster,
    rng: &mut GameRng,
    _config: &GameConfig,
) -> Result<(), CombatError> {
    match allies[caster].identity() {
        Identity::Default => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                let delta = heal_delta(3, &allies[target]);
                allies[target].change_hp(delta);
            }
        }
        Identity::Leafy => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            allies[caster].attach(EffectKind::Nullify, 1);
        }
        Identity::Doombringer => {
            if !afford(&mut allies[caster], 3)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-5, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
        }
        Identity::Cyan => {
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            allies[caster].attach(EffectKind::Dodgy, 3);
        }
        Identity::JaneDoe => {
            allies[caster].change_sp(1)?;
        }
        Identity::Onyx => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            let burning = total_effects(foes, EffectKind::Fire);
            for target in allies.living_indices() {
                let delta = heal_delta(burning, &allies[target]);
                allies[target].change_hp(delta);
            }
        }
        Identity::Viper => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            let venom = total_effects(foes, EffectKind::Poison);
            if let Some(target) = random_index(rng, foes) {
                foes[target].change_hp(-venom);
            }
        }
        Identity::Agent007n7 => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            for target in allies.living_indices() {
                let delta = heal_delta(3, &allies[target]);
                allies[target].change_hp(delta);
            }
        }
        Identity::Tasque => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                let kind = *rng.pick(&BUFF_POOL);
                allies[target].attach(kind, 2);
            }
        }
        Identity::Isaac => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, allies) {
                allies[target].attach(EffectKind::Tough, 3);
            }
        }
        Identity::JohnDoe => {
            if !afford(&mut allies[caster], 2)? {
                return Ok(());
            }
            if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-4, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
        }
        Identity::Flutter => {
            if !afford(&mut allies[caster], 4)? {
                return Ok(());
            }
            for target in allies.living_indices() {
                allies[target].attach(EffectKind::Nullify, 1);
            }
        }
        Identity::Chance => {
            if !afford(&mut allies[caster], 1)? {
                return Ok(());
            }
            if rng.chance(50) {
                allies[caster].change_hp(-3);
            } else if let Some(target) = random_index(rng, foes) {
                let delta = attack_delta(-6, &allies[caster], &foes[target]);
                foes[target].change_hp(delta);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CharacterTemplate;
    use crate::state::Combatant;

    fn side(identities: &[Identity]) -> Roster {
        let mut roster = Roster::new();
        for (i, &identity) in identities.iter().enumerate() {
            roster.push(Combatant::from_template(&CharacterTemplate::bare(
                i as u8, identity, 10, 5,
            )));
        }
        roster
    }

    #[test]
    fn leafy_tends_its_own_side_and_scrubs_effects() {
        let mut allies = side(&[Identity::Leafy, Identity::Onyx]);
        let mut foes = side(&[Identity::Default]);
        allies[1].change_hp(-4);
        allies[1].attach(EffectKind::Fire, 2);
        allies[1].attach(EffectKind::Tough, 2);
        allies[0].change_hp(-4);
        allies[0].attach(EffectKind::Poison, 2);
        let mut rng = GameRng::seeded(3);
        cast_slot_one(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        let healed = allies.iter().find(|c| c.hp() == 8).expect("someone healed");
        assert!(healed.effects().is_empty());
        assert_eq!(foes[0].hp(), 10);
    }

    #[test]
    fn leafy_scrub_still_blocks_the_heal_on_bleed() {
        let mut allies = side(&[Identity::Leafy]);
        let mut foes = side(&[Identity::Default]);
        allies[0].change_hp(-4);
        allies[0].attach(EffectKind::Bleed, 2);
        let mut rng = GameRng::seeded(3);
        cast_slot_one(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        assert_eq!(allies[0].hp(), 6);
        assert!(allies[0].effects().is_empty());
    }

    #[test]
    fn dead_foes_are_never_targeted() {
        let mut allies = side(&[Identity::Doombringer]);
        let mut foes = side(&[Identity::Default, Identity::Onyx]);
        foes[0].change_hp(-10);
        let mut rng = GameRng::seeded(11);
        for _ in 0..2 {
            allies[0].change_sp(5).unwrap();
            cast_slot_one(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        }
        assert_eq!(foes[0].hp(), 0);
        assert_eq!(foes[1].hp(), 4);
    }

    #[test]
    fn empty_foe_roster_is_a_no_op_beyond_the_cost() {
        let mut allies = side(&[Identity::Default]);
        let mut foes = Roster::new();
        let mut rng = GameRng::seeded(1);
        cast_slot_one(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        assert_eq!(allies[0].sp(), 4);
    }

    #[test]
    fn isaac_slot_one_buffs_himself() {
        let mut allies = side(&[Identity::Isaac]);
        let mut foes = side(&[Identity::Default]);
        let mut rng = GameRng::seeded(1);
        cast_slot_one(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        assert!(allies[0].has_effect(EffectKind::Tough));
        assert!(allies[0].has_effect(EffectKind::Strong));
        assert_eq!(allies[0].sp(), 3);
    }

    #[test]
    fn strong_caster_deepens_enemy_hits() {
        let mut allies = side(&[Identity::JohnDoe]);
        let mut foes = side(&[Identity::Default]);
        allies[0].attach(EffectKind::Strong, 2);
        let mut rng = GameRng::seeded(1);
        cast_slot_two(0, &mut allies, &mut foes, &mut rng, &GameConfig::default()).unwrap();
        assert_eq!(foes[0].hp(), 5);
    }
}
