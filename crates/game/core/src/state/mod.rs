//! Canonical battle state types.

mod combatant;
mod effect;
mod identity;
mod roster;

pub use combatant::{CombatError, Combatant};
pub use effect::{EffectClass, EffectInstance, EffectKind};
pub use identity::Identity;
pub use roster::Roster;
