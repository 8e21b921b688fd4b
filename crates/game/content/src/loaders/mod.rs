//! Loaders for reading game catalogs from RON files.
//!
//! Names in the data files are resolved to the closed core enums at load
//! time; a name the core does not know is a load error, never a silent
//! fallback. Load failures are fatal at startup.

mod cards;
mod characters;
mod effects;
mod items;

pub use cards::load_cards;
pub use characters::load_characters;
pub use effects::load_effects;
pub use items::load_items;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))
}
