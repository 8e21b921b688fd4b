//! Read-only character catalog contract.
//!
//! Templates are immutable; every handout is an owned, independent value,
//! so core mutation can never corrupt catalog data.

use crate::state::Identity;

/// Stable numeric id of a character template.
pub type CharacterId = u8;

/// Display descriptor for one ability slot. Purely presentational; the
/// behavior itself is keyed by [`Identity`] in the dispatch tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct AbilityRef {
    pub name: String,
    pub description: String,
}

/// Immutable template a [`crate::state::Combatant`] is copied from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CharacterTemplate {
    pub id: CharacterId,
    pub identity: Identity,
    pub max_hp: i32,
    pub max_sp: i32,
    pub ability_one: AbilityRef,
    pub ability_two: AbilityRef,
}

impl CharacterTemplate {
    /// Minimal template with empty ability descriptors. Handy for tests and
    /// tools that only care about the numbers.
    pub fn bare(id: CharacterId, identity: Identity, max_hp: i32, max_sp: i32) -> Self {
        let blank = AbilityRef {
            name: String::new(),
            description: String::new(),
        };
        Self {
            id,
            identity,
            max_hp,
            max_sp,
            ability_one: blank.clone(),
            ability_two: blank,
        }
    }
}

/// Catalog access the engine needs: lookup by id and full enumeration for
/// recruit/enemy generation. Both return owned copies.
pub trait CharacterOracle {
    /// Fresh copy of the template with the given id.
    fn template(&self, id: CharacterId) -> Option<CharacterTemplate>;

    /// Fresh copies of every template, in id order.
    fn templates(&self) -> Vec<CharacterTemplate>;
}
