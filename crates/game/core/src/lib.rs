//! Battle resolution engine for the clash campaign.
//!
//! `clash-core` owns the canonical rules: the combatant and status-effect
//! model, the per-identity ability tables, the campaign turn engine, and
//! the card/item economy. It is free of I/O; catalogs arrive through the
//! [`env::CharacterOracle`] seam and player decisions through
//! [`engine::Controller`], so clients and tests drive the same code.
pub mod abilities;
pub mod cards;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod items;
pub mod state;

pub use cards::{CardKind, CardLedger};
pub use combat::{attack_delta, heal_delta};
pub use config::GameConfig;
pub use engine::{CampaignOutcome, Controller, Engine, EngineError};
pub use env::{AbilityRef, CharacterId, CharacterOracle, CharacterTemplate, GameRng};
pub use items::{ItemCategory, ItemKind, ItemLedger};
pub use state::{CombatError, Combatant, EffectClass, EffectInstance, EffectKind, Identity, Roster};
