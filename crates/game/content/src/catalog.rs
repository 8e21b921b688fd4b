//! The loaded content catalog.

use std::path::{Path, PathBuf};

use clash_core::{CardKind, CharacterId, CharacterOracle, CharacterTemplate, EffectKind, ItemKind};

use crate::loaders::{load_cards, load_characters, load_effects, load_items};

/// Every catalog the game needs, loaded once at startup.
///
/// Implements [`CharacterOracle`] for the engine and exposes display
/// metadata for the presentation layer.
#[derive(Clone, Debug)]
pub struct ContentCatalog {
    characters: Vec<CharacterTemplate>,
    effects: Vec<(EffectKind, String)>,
    cards: Vec<(CardKind, String)>,
    items: Vec<(ItemKind, String)>,
}

impl ContentCatalog {
    /// Loads all catalogs from a data directory containing
    /// `characters.ron`, `effects.ron`, `cards.ron`, and `items.ron`.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            characters: load_characters(&dir.join("characters.ron"))?,
            effects: load_effects(&dir.join("effects.ron"))?,
            cards: load_cards(&dir.join("cards.ron"))?,
            items: load_items(&dir.join("items.ron"))?,
        })
    }

    /// The data directory shipped with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn effect_description(&self, kind: EffectKind) -> Option<&str> {
        self.effects
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, d)| d.as_str())
    }

    pub fn card_description(&self, kind: CardKind) -> Option<&str> {
        self.cards
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, d)| d.as_str())
    }

    pub fn item_description(&self, kind: ItemKind) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, d)| d.as_str())
    }
}

impl CharacterOracle for ContentCatalog {
    fn template(&self, id: CharacterId) -> Option<CharacterTemplate> {
        self.characters.iter().find(|t| t.id == id).cloned()
    }

    fn templates(&self) -> Vec<CharacterTemplate> {
        self.characters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_core::Identity;
    use strum::IntoEnumIterator;

    fn catalog() -> ContentCatalog {
        ContentCatalog::load(&ContentCatalog::bundled_data_dir()).expect("bundled data loads")
    }

    #[test]
    fn bundled_characters_cover_every_identity() {
        let catalog = catalog();
        let templates = catalog.templates();
        assert_eq!(templates.len(), 13);
        for identity in Identity::iter() {
            assert!(
                templates.iter().any(|t| t.identity == identity),
                "missing {identity}"
            );
        }
    }

    #[test]
    fn lookups_hand_out_independent_copies() {
        let catalog = catalog();
        let mut first = catalog.template(0).expect("id 0 exists");
        first.max_hp = 999;
        let second = catalog.template(0).expect("id 0 exists");
        assert_ne!(first.max_hp, second.max_hp);
    }

    #[test]
    fn every_effect_card_and_item_is_described() {
        let catalog = catalog();
        for kind in EffectKind::iter() {
            assert!(catalog.effect_description(kind).is_some(), "missing {kind}");
        }
        for kind in CardKind::iter() {
            assert!(catalog.card_description(kind).is_some(), "missing {kind}");
        }
        for kind in ItemKind::iter() {
            assert!(catalog.item_description(kind).is_some(), "missing {kind}");
        }
    }

    #[test]
    fn unknown_id_yields_nothing() {
        assert!(catalog().template(200).is_none());
    }
}
