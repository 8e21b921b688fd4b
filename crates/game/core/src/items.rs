//! Consumable items: catalog enum, inventory, and use-time scripts.
//!
//! Items are offered at the end of every turn and bought between battles.
//! Using one removes exactly one matching instance from the inventory and
//! applies its script to a whole side at once.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::env::GameRng;
use crate::state::{CombatError, EffectKind, Roster};

/// Shop shelf grouping, display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(Display)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ItemCategory {
    Potion,
    Debuffer,
    Grenade,
    Misc,
}

/// Every purchasable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ItemKind {
    #[strum(serialize = "Health Potion")]
    HealthPotion,
    #[strum(serialize = "Energy Potion")]
    EnergyPotion,
    Incendiary,
    Toxin,
    #[strum(serialize = "Frag Grenade")]
    FragGrenade,
    Flashbang,
    #[strum(serialize = "Shrapnel Burst")]
    ShrapnelBurst,
    Purifier,
}

impl ItemKind {
    /// Stable numeric id, used in shop and use prompts.
    pub const fn id(self) -> u8 {
        match self {
            Self::HealthPotion => 0,
            Self::EnergyPotion => 1,
            Self::Incendiary => 2,
            Self::Toxin => 3,
            Self::FragGrenade => 4,
            Self::Flashbang => 5,
            Self::ShrapnelBurst => 6,
            Self::Purifier => 7,
        }
    }

    pub const fn category(self) -> ItemCategory {
        match self {
            Self::HealthPotion | Self::EnergyPotion => ItemCategory::Potion,
            Self::Incendiary | Self::Toxin => ItemCategory::Debuffer,
            Self::FragGrenade | Self::Flashbang => ItemCategory::Grenade,
            Self::ShrapnelBurst | Self::Purifier => ItemCategory::Misc,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::iter().find(|kind| kind.id() == id)
    }
}

/// The player's item inventory, in purchase order.
#[derive(Clone, Debug, Default)]
pub struct ItemLedger {
    items: Vec<ItemKind>,
}

impl ItemLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ItemKind) {
        self.items.push(kind);
    }

    pub fn items(&self) -> &[ItemKind] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes one instance of the given item. Returns false (and removes
    /// nothing) if none is held.
    pub fn remove_one(&mut self, kind: ItemKind) -> bool {
        match self.items.iter().position(|&i| i == kind) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Applies an item's script. Every item affects a whole side; none of the
/// deltas route through the attack/heal adjustment rules.
pub fn apply_item(
    kind: ItemKind,
    party: &mut Roster,
    enemies: &mut Roster,
    rng: &mut GameRng,
) -> Result<(), CombatError> {
    match kind {
        ItemKind::HealthPotion => {
            for member in party.iter_mut() {
                member.change_hp(10);
            }
        }
        ItemKind::EnergyPotion => {
            for member in party.iter_mut() {
                member.change_sp(10)?;
            }
        }
        ItemKind::Incendiary => {
            for foe in enemies.iter_mut() {
                foe.attach(EffectKind::Fire, 3);
            }
        }
        ItemKind::Toxin => {
            for foe in enemies.iter_mut() {
                foe.attach(EffectKind::Poison, 3);
            }
        }
        ItemKind::FragGrenade => {
            for foe in enemies.iter_mut() {
                foe.change_hp(-3);
            }
        }
        ItemKind::Flashbang => {
            for foe in enemies.iter_mut() {
                foe.attach(EffectKind::Stun, 1);
            }
        }
        ItemKind::ShrapnelBurst => {
            for foe in enemies.iter_mut() {
                let shred = rng.range_inclusive(1, 5);
                foe.change_hp(-shred);
            }
        }
        ItemKind::Purifier => {
            for member in party.iter_mut() {
                member.attach(EffectKind::Pure, 2);
            }
        }
    }
    Ok(())
}
