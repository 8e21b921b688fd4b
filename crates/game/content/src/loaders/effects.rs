//! Effect display-metadata loader.

use std::path::Path;

use clash_core::EffectKind;

use super::{LoadResult, read_file};

#[derive(Debug, serde::Deserialize)]
struct EffectSpec {
    name: String,
    description: String,
}

/// Loads effect descriptions from a RON file, keyed by family name.
pub fn load_effects(path: &Path) -> LoadResult<Vec<(EffectKind, String)>> {
    let content = read_file(path)?;
    let specs: Vec<EffectSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse effect catalog {}: {}", path.display(), e))?;

    let mut effects = Vec::with_capacity(specs.len());
    for spec in specs {
        let kind: EffectKind = spec.name.parse().map_err(|_| {
            anyhow::anyhow!("unknown effect '{}' in {}", spec.name, path.display())
        })?;
        if effects.iter().any(|(k, _)| *k == kind) {
            anyhow::bail!("duplicate effect '{}' in {}", kind, path.display());
        }
        effects.push((kind, spec.description));
    }
    Ok(effects)
}
