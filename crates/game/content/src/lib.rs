//! Data-driven game content and loaders.
//!
//! Houses the RON catalogs (characters, effects, cards, items) and the
//! loaders that turn them into the oracle and display metadata the engine
//! and clients consume. Content never appears in battle state; every
//! lookup hands out an owned copy.

pub mod catalog;
pub mod loaders;

pub use catalog::ContentCatalog;
pub use loaders::{load_cards, load_characters, load_effects, load_items};
