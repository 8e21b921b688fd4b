//! Status effect system for combatants.
//!
//! Effects are named, duration-bearing attachments classified as buffs or
//! debuffs. The set of effect families is closed: combat rules dispatch on
//! [`EffectKind`], never on a display string.
//!
//! # Turn-based Duration
//!
//! Durations count end-of-turn ticks. An effect attached mid-turn via
//! [`EffectInstance::lasting`] stores one extra point of duration so that it
//! survives the tick of the turn it was applied in and stays active for the
//! requested number of full turns. Effects whose duration has reached 0 are
//! dropped during start-of-turn cleanup.

use strum::{Display, EnumIter, EnumString};

/// Buff/debuff classification of an effect family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum EffectClass {
    Buff,
    Debuff,
}

/// The closed set of effect families.
///
/// Each family carries a stable numeric id used where combat rules key on
/// ids rather than names (the opposing side's stun check).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum EffectKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// 1 damage at every end-of-turn tick.
    Fire,

    /// 1 damage at every end-of-turn tick, but never below 1 HP.
    Poison,

    /// Carrier skips its action entirely.
    Stun,

    /// Blocks incoming heals from bleed-sensitive abilities.
    Bleed,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Strips all debuffs from the carrier at start of turn.
    Pure,

    /// Each stack shifts incoming damage by 1 toward zero.
    Tough,

    /// Outgoing damage increased by 1 (once, regardless of stacks).
    Strong,

    /// Incoming damage short-circuits to exactly 0.
    Nullify,

    /// Utility buff with no intrinsic combat math.
    Dodgy,
}

impl EffectKind {
    /// Stable numeric id of the effect family.
    pub const fn id(self) -> u8 {
        match self {
            EffectKind::Fire => 0,
            EffectKind::Poison => 1,
            EffectKind::Stun => 2,
            EffectKind::Bleed => 3,
            EffectKind::Pure => 4,
            EffectKind::Tough => 5,
            EffectKind::Strong => 6,
            EffectKind::Nullify => 7,
            EffectKind::Dodgy => 8,
        }
    }

    /// Buff or debuff classification.
    pub const fn class(self) -> EffectClass {
        match self {
            EffectKind::Fire
            | EffectKind::Poison
            | EffectKind::Stun
            | EffectKind::Bleed => EffectClass::Debuff,
            EffectKind::Pure
            | EffectKind::Tough
            | EffectKind::Strong
            | EffectKind::Nullify
            | EffectKind::Dodgy => EffectClass::Buff,
        }
    }
}

/// A live effect attached to one combatant.
///
/// Every instance is an owned, independent value: attaching the same family
/// twice yields two instances whose durations tick separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectInstance {
    pub kind: EffectKind,
    /// Remaining end-of-turn ticks before the effect expires.
    pub duration: i32,
}

impl EffectInstance {
    /// Creates an instance that stays active for `turns` full turns.
    ///
    /// Stores `turns + 1` so the end-of-turn decrement of the turn the
    /// effect was applied in does not eat into the requested duration.
    pub fn lasting(kind: EffectKind, turns: i32) -> Self {
        Self {
            kind,
            duration: turns + 1,
        }
    }

    /// True once the remaining duration has been ticked down to nothing.
    pub fn expired(&self) -> bool {
        self.duration <= 0
    }
}
