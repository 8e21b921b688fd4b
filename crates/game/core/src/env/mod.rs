//! Read-only world data and deterministic randomness.
//!
//! The character oracle hands the engine immutable template copies; the RNG
//! is the campaign's single source of nondeterminism, seedable for replay.
mod characters;
mod rng;

pub use characters::{AbilityRef, CharacterId, CharacterOracle, CharacterTemplate};
pub use rng::GameRng;
