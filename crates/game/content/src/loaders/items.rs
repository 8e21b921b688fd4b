//! Item display-metadata loader.

use std::path::Path;

use clash_core::ItemKind;
use strum::IntoEnumIterator;

use super::{LoadResult, read_file};

#[derive(Debug, serde::Deserialize)]
struct ItemSpec {
    name: String,
    description: String,
}

/// Loads item descriptions from a RON file, keyed by item name.
pub fn load_items(path: &Path) -> LoadResult<Vec<(ItemKind, String)>> {
    let content = read_file(path)?;
    let specs: Vec<ItemSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse item catalog {}: {}", path.display(), e))?;

    let mut items = Vec::with_capacity(specs.len());
    for spec in specs {
        let kind = ItemKind::iter()
            .find(|k| k.to_string() == spec.name)
            .ok_or_else(|| {
                anyhow::anyhow!("unknown item '{}' in {}", spec.name, path.display())
            })?;
        if items.iter().any(|(k, _)| *k == kind) {
            anyhow::bail!("duplicate item '{}' in {}", kind, path.display());
        }
        items.push((kind, spec.description));
    }
    Ok(items)
}
