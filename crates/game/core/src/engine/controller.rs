//! Decision seam between the engine and whoever is playing.
//!
//! The engine owns all rules and validation; a [`Controller`] only
//! produces raw decisions and renders what it is shown. Invalid picks are
//! handled by the engine (retry or silent skip, depending on the prompt),
//! so implementations never need to understand the rules.

use crate::cards::CardKind;
use crate::env::{CharacterId, CharacterTemplate};
use crate::items::ItemKind;
use crate::state::{Combatant, Roster};

use super::errors::EngineError;

pub trait Controller {
    /// Renders both rosters at the top of a turn.
    fn battlefield(&mut self, turn: u32, party: &Roster, enemies: &Roster);

    /// Raw action index for the acting combatant: 0 basic attack, 1 first
    /// ability, 2 second ability. Any other number falls back to a basic
    /// attack.
    fn action_choice(&mut self, actor: &Combatant) -> Result<u32, EngineError>;

    /// A target name. The engine re-asks until it matches a living member
    /// of `candidates`.
    fn target_name(&mut self, candidates: &Roster) -> Result<String, EngineError>;

    /// Recruit pick by character id among the offered templates. The
    /// engine re-asks on ids not offered.
    fn recruit_pick(&mut self, options: &[CharacterTemplate])
    -> Result<CharacterId, EngineError>;

    /// Draft pick by card id among the offered cards. The engine re-asks
    /// on ids not offered.
    fn draft_pick(&mut self, options: &[CardKind]) -> Result<u8, EngineError>;

    /// End-of-turn offer to use an item. Only asked while items are held.
    fn wants_item(&mut self) -> Result<bool, EngineError>;

    /// Item id to use from the held list. An id not held skips the use.
    fn item_pick(&mut self, held: &[ItemKind]) -> Result<u8, EngineError>;

    /// Shop pick by item id; `None` or an unknown id leaves without
    /// buying.
    fn shop_pick(&mut self, coins: u32) -> Result<Option<u8>, EngineError>;

    /// Post-battle report: restored party, card collection, purse.
    fn battle_won(&mut self, party: &Roster, cards: &[CardKind], coins: u32);

    /// One-line narration.
    fn note(&mut self, message: &str);
}
