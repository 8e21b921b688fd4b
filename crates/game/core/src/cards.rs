//! Passive card catalog and the player's card ledger.
//!
//! Cards come in two flavors. Draft cards (Bulk, Exchange, Bloodprice,
//! Payday) fire once at acquisition; the engine applies those effects and
//! the card then sits inert in the ledger. Milestone cards (Regeneration,
//! Restoration, Gift, Last, Snowballing) do nothing at acquisition and are
//! counted by the turn engine when their trigger comes around. Anchor is a
//! collectible with no trigger.

use strum::{Display, EnumIter, IntoEnumIterator};

/// Every card the catalog can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum CardKind {
    Bulk,
    Exchange,
    Regeneration,
    Restoration,
    Gift,
    Payday,
    Last,
    Anchor,
    Snowballing,
    Bloodprice,
}

impl CardKind {
    /// Stable numeric id, used in draft prompts.
    pub const fn id(self) -> u8 {
        match self {
            Self::Bulk => 0,
            Self::Exchange => 1,
            Self::Regeneration => 2,
            Self::Restoration => 3,
            Self::Gift => 4,
            Self::Payday => 5,
            Self::Last => 6,
            Self::Anchor => 7,
            Self::Snowballing => 8,
            Self::Bloodprice => 9,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::iter().find(|kind| kind.id() == id)
    }
}

/// The player's accumulated cards, in acquisition order.
#[derive(Clone, Debug, Default)]
pub struct CardLedger {
    cards: Vec<CardKind>,
}

impl CardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: CardKind) {
        self.cards.push(kind);
    }

    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    /// How many copies of a family are held. Milestone math multiplies this
    /// by the family's per-copy payout.
    pub fn count(&self, kind: CardKind) -> i32 {
        self.cards.iter().filter(|&&c| c == kind).count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for kind in CardKind::iter() {
            assert_eq!(CardKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CardKind::from_id(10), None);
    }

    #[test]
    fn ten_cards_exist() {
        assert_eq!(CardKind::iter().count(), 10);
    }

    #[test]
    fn ledger_counts_by_family() {
        let mut ledger = CardLedger::new();
        ledger.add(CardKind::Gift);
        ledger.add(CardKind::Snowballing);
        ledger.add(CardKind::Gift);
        assert_eq!(ledger.count(CardKind::Gift), 2);
        assert_eq!(ledger.count(CardKind::Snowballing), 1);
        assert_eq!(ledger.count(CardKind::Last), 0);
        assert_eq!(ledger.cards().len(), 3);
    }
}
