//! Character catalog loader.

use std::collections::HashSet;
use std::path::Path;

use clash_core::{AbilityRef, CharacterTemplate, Identity};

use super::{LoadResult, read_file};

/// On-disk shape of one character entry. The identity is stored as its
/// display name and resolved to the closed enum here.
#[derive(Debug, serde::Deserialize)]
struct CharacterSpec {
    id: u8,
    identity: String,
    max_hp: i32,
    max_sp: i32,
    ability_one: AbilityRef,
    ability_two: AbilityRef,
}

/// Loads the character catalog from a RON file.
///
/// RON format: `Vec<CharacterSpec>`. Ids and identities must both be
/// unique, and stats must be positive.
pub fn load_characters(path: &Path) -> LoadResult<Vec<CharacterTemplate>> {
    let content = read_file(path)?;
    let specs: Vec<CharacterSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse character catalog {}: {}", path.display(), e))?;

    let mut seen_ids = HashSet::new();
    let mut seen_identities = HashSet::new();
    let mut templates = Vec::with_capacity(specs.len());
    for spec in specs {
        let identity: Identity = spec.identity.parse().map_err(|_| {
            anyhow::anyhow!("unknown identity '{}' in {}", spec.identity, path.display())
        })?;
        if !seen_ids.insert(spec.id) {
            anyhow::bail!("duplicate character id {} in {}", spec.id, path.display());
        }
        if !seen_identities.insert(identity) {
            anyhow::bail!("duplicate identity '{}' in {}", identity, path.display());
        }
        if spec.max_hp <= 0 || spec.max_sp < 0 {
            anyhow::bail!(
                "character '{}' has invalid stats {}/{} in {}",
                identity,
                spec.max_hp,
                spec.max_sp,
                path.display()
            );
        }
        templates.push(CharacterTemplate {
            id: spec.id,
            identity,
            max_hp: spec.max_hp,
            max_sp: spec.max_sp,
            ability_one: spec.ability_one,
            ability_two: spec.ability_two,
        });
    }
    Ok(templates)
}
