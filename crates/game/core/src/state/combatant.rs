//! Mutable combatant state and its resource mutation contract.
//!
//! A [`Combatant`] owns the only mutable combat state in the game: current
//! HP/SP and the insertion-ordered effect list. All HP/SP changes flow
//! through the clamped mutators here; nothing else writes those fields.

use super::effect::{EffectClass, EffectInstance, EffectKind};
use super::identity::Identity;
use crate::env::{AbilityRef, CharacterId, CharacterTemplate};

/// Errors raised by resource mutation.
///
/// SP underflow is a defensive invariant: ability scripts pre-check
/// affordability, so a triggered underflow means an internal bug and is
/// treated as fatal by the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("SP can't go into negatives: {name} at {sp} SP took {delta}")]
    SpUnderflow {
        name: String,
        sp: i32,
        delta: i32,
    },
}

/// One living (or freshly dead, pre-sweep) participant in a battle.
#[derive(Clone, Debug)]
pub struct Combatant {
    id: CharacterId,
    identity: Identity,
    max_hp: i32,
    hp: i32,
    max_sp: i32,
    sp: i32,
    alive: bool,
    effects: Vec<EffectInstance>,
    ability_one: AbilityRef,
    ability_two: AbilityRef,
}

impl Combatant {
    /// Instantiates a combatant from a catalog template, at full resources.
    pub fn from_template(template: &CharacterTemplate) -> Self {
        Self {
            id: template.id,
            identity: template.identity,
            max_hp: template.max_hp,
            hp: template.max_hp,
            max_sp: template.max_sp,
            sp: template.max_sp,
            alive: true,
            effects: Vec::new(),
            ability_one: template.ability_one.clone(),
            ability_two: template.ability_two.clone(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Display name, also the token players type to target this combatant.
    pub fn name(&self) -> String {
        self.identity.to_string()
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn sp(&self) -> i32 {
        self.sp
    }

    pub fn max_sp(&self) -> i32 {
        self.max_sp
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn ability_one(&self) -> &AbilityRef {
        &self.ability_one
    }

    pub fn ability_two(&self) -> &AbilityRef {
        &self.ability_two
    }

    // ========================================================================
    // Resource mutation contract
    // ========================================================================

    /// Applies an HP delta, clamping to `[0, max_hp]`.
    ///
    /// Driving HP below 1 sets it to 0 and marks the combatant dead. Death
    /// is one-way: later healing raises HP but never flips `alive` back.
    pub fn change_hp(&mut self, delta: i32) {
        self.hp += delta;
        if self.hp > self.max_hp {
            self.hp = self.max_hp;
        } else if self.hp < 1 {
            self.hp = 0;
            self.alive = false;
        }
    }

    /// Applies an SP delta, clamping to `max_sp` from above.
    ///
    /// A result below 0 is an invariant breach: ability scripts must check
    /// affordability before committing the cost.
    pub fn change_sp(&mut self, delta: i32) -> Result<(), CombatError> {
        let next = self.sp + delta;
        if next < 0 {
            return Err(CombatError::SpUnderflow {
                name: self.name(),
                sp: self.sp,
                delta,
            });
        }
        self.sp = next.min(self.max_sp);
        Ok(())
    }

    /// Adjusts maximum HP. Current HP is left untouched; a maximum driven
    /// to 0 or below kills the combatant.
    pub fn change_max_hp(&mut self, delta: i32) {
        self.max_hp += delta;
        if self.max_hp <= 0 {
            self.alive = false;
        }
    }

    /// Adjusts maximum SP, clamping to 0 from below. Never kills.
    pub fn change_max_sp(&mut self, delta: i32) {
        self.max_sp = (self.max_sp + delta).max(0);
    }

    /// Replaces maximum HP outright (Chance's reroll). Current HP is left
    /// untouched, matching [`Combatant::change_max_hp`].
    pub fn set_max_hp(&mut self, max_hp: i32) {
        self.max_hp = max_hp;
        if self.max_hp <= 0 {
            self.alive = false;
        }
    }

    /// Restores current HP and SP to their maximums. Effects are cleared by
    /// the caller, not here.
    pub fn full_restore(&mut self) {
        self.hp = self.max_hp;
        self.sp = self.max_sp;
    }

    // ========================================================================
    // Effect list
    // ========================================================================

    pub fn effects(&self) -> &[EffectInstance] {
        &self.effects
    }

    /// Attaches a fresh effect instance lasting `turns` full turns.
    pub fn attach(&mut self, kind: EffectKind, turns: i32) {
        self.effects.push(EffectInstance::lasting(kind, turns));
    }

    /// Classification query: is any effect of this family attached?
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Id-keyed variant of [`Combatant::has_effect`], used where rules key
    /// on the numeric effect id instead of the family name.
    pub fn has_effect_id(&self, id: u8) -> bool {
        self.effects.iter().any(|e| e.kind.id() == id)
    }

    /// Removes the first attached effect of the given family, if any.
    pub fn remove_first(&mut self, kind: EffectKind) {
        if let Some(pos) = self.effects.iter().position(|e| e.kind == kind) {
            self.effects.remove(pos);
        }
    }

    /// Strips every debuff-classified effect.
    pub fn strip_debuffs(&mut self) {
        self.effects.retain(|e| e.kind.class() != EffectClass::Debuff);
    }

    /// Removes every attached effect.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Drops effects whose duration has run out.
    pub fn drop_expired(&mut self) {
        self.effects.retain(|e| !e.expired());
    }

    /// Start-of-turn cleanup: a Pure effect strips debuffs first, then
    /// expired effects are dropped.
    pub fn start_of_turn_cleanup(&mut self) {
        if self.has_effect(EffectKind::Pure) {
            self.strip_debuffs();
        }
        self.drop_expired();
    }

    /// End-of-turn tick: every effect loses one duration point; Fire deals
    /// 1 damage per stack, Poison deals 1 per stack but only while pre-tick
    /// HP is at least 2 (poison never finishes a kill on its own).
    pub fn tick_effects(&mut self) {
        for i in 0..self.effects.len() {
            self.effects[i].duration -= 1;
            match self.effects[i].kind {
                EffectKind::Fire => self.change_hp(-1),
                EffectKind::Poison => {
                    if self.hp >= 2 {
                        self.change_hp(-1);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CharacterTemplate;

    fn dummy(max_hp: i32, max_sp: i32) -> Combatant {
        Combatant::from_template(&CharacterTemplate::bare(
            0,
            Identity::Default,
            max_hp,
            max_sp,
        ))
    }

    #[test]
    fn hp_clamps_both_ways() {
        let mut c = dummy(10, 5);
        c.change_hp(25);
        assert_eq!(c.hp(), 10);
        c.change_hp(-4);
        assert_eq!(c.hp(), 6);
        c.change_hp(-100);
        assert_eq!(c.hp(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn death_is_terminal_even_after_healing() {
        let mut c = dummy(10, 5);
        c.change_hp(-10);
        assert!(!c.is_alive());
        c.change_hp(7);
        assert!(!c.is_alive());
    }

    #[test]
    fn sp_clamps_above_and_errors_below() {
        let mut c = dummy(10, 5);
        assert!(c.change_sp(9).is_ok());
        assert_eq!(c.sp(), 5);
        assert!(c.change_sp(-5).is_ok());
        assert_eq!(c.sp(), 0);
        assert!(matches!(
            c.change_sp(-1),
            Err(CombatError::SpUnderflow { sp: 0, delta: -1, .. })
        ));
        assert_eq!(c.sp(), 0);
    }

    #[test]
    fn max_hp_zero_kills_without_touching_current_hp() {
        let mut c = dummy(3, 5);
        c.change_max_hp(-3);
        assert!(!c.is_alive());
        assert_eq!(c.hp(), 3);
    }

    #[test]
    fn max_sp_never_goes_negative() {
        let mut c = dummy(10, 2);
        c.change_max_sp(-7);
        assert_eq!(c.max_sp(), 0);
        assert!(c.is_alive());
    }

    #[test]
    fn attached_effects_are_independent_instances() {
        let mut c = dummy(10, 5);
        c.attach(EffectKind::Fire, 2);
        c.attach(EffectKind::Fire, 2);
        c.tick_effects();
        assert_eq!(c.effects()[0].duration, c.effects()[1].duration);
        assert_eq!(c.hp(), 8); // two Fire stacks, 1 damage each
    }

    #[test]
    fn poison_never_finishes_a_kill() {
        let mut c = dummy(10, 5);
        c.change_hp(-9);
        c.attach(EffectKind::Poison, 3);
        c.tick_effects();
        assert_eq!(c.hp(), 1);
        assert!(c.is_alive());
    }

    #[test]
    fn fire_has_no_such_mercy() {
        let mut c = dummy(10, 5);
        c.change_hp(-9);
        c.attach(EffectKind::Fire, 3);
        c.tick_effects();
        assert_eq!(c.hp(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn pure_strips_debuffs_before_expiry_cleanup() {
        let mut c = dummy(10, 5);
        c.attach(EffectKind::Poison, 3);
        c.attach(EffectKind::Pure, 1);
        c.attach(EffectKind::Tough, 2);
        c.start_of_turn_cleanup();
        assert!(!c.has_effect(EffectKind::Poison));
        assert!(c.has_effect(EffectKind::Pure));
        assert!(c.has_effect(EffectKind::Tough));
    }

    #[test]
    fn expired_effects_are_dropped_on_cleanup() {
        let mut c = dummy(10, 5);
        c.attach(EffectKind::Dodgy, 1);
        c.tick_effects();
        c.tick_effects();
        c.start_of_turn_cleanup();
        assert!(c.effects().is_empty());
    }

    #[test]
    fn full_restore_leaves_effects_alone() {
        let mut c = dummy(10, 5);
        c.change_hp(-6);
        c.change_sp(-5).unwrap();
        c.attach(EffectKind::Bleed, 2);
        c.full_restore();
        assert_eq!((c.hp(), c.sp()), (10, 5));
        assert!(c.has_effect(EffectKind::Bleed));
    }
}
