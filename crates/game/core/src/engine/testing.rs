//! Deterministic test doubles: a scripted controller and a fixed catalog.

use std::collections::VecDeque;

use crate::cards::CardKind;
use crate::env::{CharacterId, CharacterOracle, CharacterTemplate};
use crate::items::ItemKind;
use crate::state::{Combatant, Roster};

use super::controller::Controller;
use super::errors::EngineError;

/// Controller that replays queued decisions.
///
/// Unqueued action choices default to a basic attack and unqueued offers
/// decline, matching a player who mashes through prompts. An unqueued
/// target name is an error: a test that triggers an unplanned target
/// prompt is broken and should fail loudly.
#[derive(Debug, Default)]
pub struct ScriptedController {
    actions: VecDeque<u32>,
    targets: VecDeque<String>,
    recruits: VecDeque<CharacterId>,
    drafts: VecDeque<u8>,
    item_offers: VecDeque<bool>,
    item_picks: VecDeque<u8>,
    shop_picks: VecDeque<Option<u8>>,
    pub notes: Vec<String>,
}

impl ScriptedController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions<I: IntoIterator<Item = u32>>(mut self, actions: I) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn with_recruits<I: IntoIterator<Item = CharacterId>>(mut self, picks: I) -> Self {
        self.recruits.extend(picks);
        self
    }

    pub fn with_drafts<I: IntoIterator<Item = u8>>(mut self, picks: I) -> Self {
        self.drafts.extend(picks);
        self
    }

    pub fn with_item_offers<I: IntoIterator<Item = bool>>(mut self, answers: I) -> Self {
        self.item_offers.extend(answers);
        self
    }

    pub fn with_item_picks<I: IntoIterator<Item = u8>>(mut self, picks: I) -> Self {
        self.item_picks.extend(picks);
        self
    }

    pub fn with_shop_picks<I: IntoIterator<Item = Option<u8>>>(mut self, picks: I) -> Self {
        self.shop_picks.extend(picks);
        self
    }
}

impl Controller for ScriptedController {
    fn battlefield(&mut self, _turn: u32, _party: &Roster, _enemies: &Roster) {}

    fn action_choice(&mut self, _actor: &Combatant) -> Result<u32, EngineError> {
        Ok(self.actions.pop_front().unwrap_or(0))
    }

    fn target_name(&mut self, _candidates: &Roster) -> Result<String, EngineError> {
        self.targets.pop_front().ok_or(EngineError::InputClosed)
    }

    fn recruit_pick(
        &mut self,
        options: &[CharacterTemplate],
    ) -> Result<CharacterId, EngineError> {
        match self.recruits.pop_front() {
            Some(id) => Ok(id),
            None => options.first().map(|t| t.id).ok_or(EngineError::InputClosed),
        }
    }

    fn draft_pick(&mut self, options: &[CardKind]) -> Result<u8, EngineError> {
        match self.drafts.pop_front() {
            Some(id) => Ok(id),
            None => options.first().map(|k| k.id()).ok_or(EngineError::InputClosed),
        }
    }

    fn wants_item(&mut self) -> Result<bool, EngineError> {
        Ok(self.item_offers.pop_front().unwrap_or(false))
    }

    fn item_pick(&mut self, _held: &[ItemKind]) -> Result<u8, EngineError> {
        self.item_picks.pop_front().ok_or(EngineError::InputClosed)
    }

    fn shop_pick(&mut self, _coins: u32) -> Result<Option<u8>, EngineError> {
        Ok(self.shop_picks.pop_front().unwrap_or(None))
    }

    fn battle_won(&mut self, _party: &Roster, _cards: &[CardKind], _coins: u32) {}

    fn note(&mut self, message: &str) {
        self.notes.push(message.to_owned());
    }
}

/// In-memory catalog with a fixed template list.
#[derive(Clone, Debug)]
pub struct FixedOracle {
    templates: Vec<CharacterTemplate>,
}

impl FixedOracle {
    pub fn new<I: IntoIterator<Item = CharacterTemplate>>(templates: I) -> Self {
        Self { templates: templates.into_iter().collect() }
    }
}

impl CharacterOracle for FixedOracle {
    fn template(&self, id: CharacterId) -> Option<CharacterTemplate> {
        self.templates.iter().find(|t| t.id == id).cloned()
    }

    fn templates(&self) -> Vec<CharacterTemplate> {
        self.templates.clone()
    }
}
