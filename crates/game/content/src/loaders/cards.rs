//! Card display-metadata loader.

use std::path::Path;

use clash_core::CardKind;
use strum::IntoEnumIterator;

use super::{LoadResult, read_file};

#[derive(Debug, serde::Deserialize)]
struct CardSpec {
    name: String,
    description: String,
}

/// Loads card descriptions from a RON file, keyed by card name.
pub fn load_cards(path: &Path) -> LoadResult<Vec<(CardKind, String)>> {
    let content = read_file(path)?;
    let specs: Vec<CardSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse card catalog {}: {}", path.display(), e))?;

    let mut cards = Vec::with_capacity(specs.len());
    for spec in specs {
        let kind = CardKind::iter()
            .find(|k| k.to_string() == spec.name)
            .ok_or_else(|| {
                anyhow::anyhow!("unknown card '{}' in {}", spec.name, path.display())
            })?;
        if cards.iter().any(|(k, _)| *k == kind) {
            anyhow::bail!("duplicate card '{}' in {}", kind, path.display());
        }
        cards.push((kind, spec.description));
    }
    Ok(cards)
}
