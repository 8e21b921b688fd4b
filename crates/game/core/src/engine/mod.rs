//! The campaign turn engine.
//!
//! Drives the fixed opening battles, the open-ended generated battles, and
//! the turn state machine inside each battle: start-of-turn cleanup, the
//! player phase, the enemy phase, and the end-of-turn pipeline (effect
//! ticks, corpse sweep, milestone payouts, item offer). All player
//! interaction flows through the [`Controller`] seam.

mod controller;
mod errors;
pub mod testing;

pub use controller::Controller;
pub use errors::EngineError;

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::abilities::{self, DEBUFF_POOL, basic_attack, chosen_index, random_index};
use crate::cards::{CardKind, CardLedger};
use crate::config::GameConfig;
use crate::env::{CharacterOracle, CharacterTemplate, GameRng};
use crate::items::{ItemKind, ItemLedger, apply_item};
use crate::state::{CombatError, Combatant, EffectKind, Identity, Roster};

/// How a campaign ends: the party is wiped and the run is scored by
/// battles survived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CampaignOutcome {
    pub battles_survived: u32,
}

pub struct Engine<'a> {
    oracle: &'a dyn CharacterOracle,
    config: GameConfig,
    rng: GameRng,
    party: Roster,
    enemies: Roster,
    cards: CardLedger,
    items: ItemLedger,
    coins: u32,
    battles: u32,
    turn: u32,
    synergy_milestone: u32,
    recovery_milestone: u32,
    last_stand: bool,
}

impl<'a> Engine<'a> {
    pub fn new(oracle: &'a dyn CharacterOracle, config: GameConfig, rng: GameRng) -> Self {
        Self {
            oracle,
            config,
            rng,
            party: Roster::new(),
            enemies: Roster::new(),
            cards: CardLedger::new(),
            items: ItemLedger::new(),
            coins: 0,
            battles: 0,
            turn: 0,
            synergy_milestone: config.synergy_step,
            recovery_milestone: config.recovery_step,
            last_stand: false,
        }
    }

    pub fn party(&self) -> &Roster {
        &self.party
    }

    pub fn enemies(&self) -> &Roster {
        &self.enemies
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// Plays a whole campaign: three fixed opening battles, then generated
    /// battles until the party is wiped.
    pub fn run(&mut self, ctrl: &mut dyn Controller) -> Result<CampaignOutcome, EngineError> {
        for wave in 1..=3 {
            self.reset_battle();
            self.recruit(ctrl)?;
            for _ in 0..wave {
                self.spawn_enemy();
            }
            if let Some(outcome) = self.fight_out(ctrl)? {
                return Ok(outcome);
            }
            self.break_time(ctrl);
        }
        loop {
            self.reset_battle();
            if self.party.len() < self.config.party_cap {
                self.recruit(ctrl)?;
            } else {
                self.draft(ctrl)?;
            }
            for _ in 0..self.config.generated_enemies {
                self.spawn_enemy();
            }
            // The vanguard pays for the ambush, unmitigated.
            if let Some(vanguard) = self.party.first_mut() {
                vanguard.change_hp(-self.config.vanguard_tax);
            }
            if let Some(outcome) = self.fight_out(ctrl)? {
                return Ok(outcome);
            }
            self.break_time(ctrl);
            self.shop(ctrl)?;
        }
    }

    // ========================================================================
    // Battle setup
    // ========================================================================

    fn reset_battle(&mut self) {
        self.last_stand = false;
        self.turn = 0;
        self.enemies.clear();
        self.synergy_milestone = self.config.synergy_step;
        self.recovery_milestone = self.config.recovery_step;
        debug!(battle = self.battles + 1, "battle start");
    }

    /// Offers up to three templates not yet in the party and adds the pick.
    fn recruit(&mut self, ctrl: &mut dyn Controller) -> Result<(), EngineError> {
        let mut pool: Vec<CharacterTemplate> = self
            .oracle
            .templates()
            .into_iter()
            .filter(|t| !self.party.contains_character(t.id))
            .collect();
        let mut options = Vec::new();
        for _ in 0..3 {
            if pool.is_empty() {
                break;
            }
            let i = self.rng.below(pool.len() as u32) as usize;
            options.push(pool.swap_remove(i));
        }
        loop {
            let id = ctrl.recruit_pick(&options)?;
            if let Some(template) = options.iter().find(|t| t.id == id) {
                self.party.push(Combatant::from_template(template));
                return Ok(());
            }
            ctrl.note("No recruit with that id is on offer.");
        }
    }

    /// Adds one random enemy not already fielded.
    fn spawn_enemy(&mut self) {
        let pool: Vec<CharacterTemplate> = self
            .oracle
            .templates()
            .into_iter()
            .filter(|t| !self.enemies.contains_character(t.id))
            .collect();
        if pool.is_empty() {
            return;
        }
        let i = self.rng.below(pool.len() as u32) as usize;
        self.enemies.push(Combatant::from_template(&pool[i]));
    }

    /// Offers three distinct cards and applies the pick's draft effect.
    fn draft(&mut self, ctrl: &mut dyn Controller) -> Result<(), EngineError> {
        let mut pool: Vec<CardKind> = CardKind::iter().collect();
        let mut options = Vec::new();
        for _ in 0..3 {
            let i = self.rng.below(pool.len() as u32) as usize;
            options.push(pool.swap_remove(i));
        }
        loop {
            let id = ctrl.draft_pick(&options)?;
            if let Some(&kind) = options.iter().find(|k| k.id() == id) {
                self.acquire_card(kind);
                return Ok(());
            }
            ctrl.note("No card with that id is on offer.");
        }
    }

    fn acquire_card(&mut self, kind: CardKind) {
        self.cards.add(kind);
        match kind {
            CardKind::Bulk => {
                for member in self.party.iter_mut() {
                    member.change_max_hp(1);
                }
            }
            CardKind::Exchange => {
                for member in self.party.iter_mut() {
                    member.change_max_hp(-1);
                    member.change_max_sp(1);
                }
            }
            CardKind::Bloodprice => {
                for member in self.party.iter_mut() {
                    member.change_max_hp(-1);
                }
                self.coins += 5;
            }
            CardKind::Payday => self.coins += 2,
            _ => {}
        }
    }

    // ========================================================================
    // Turn loop
    // ========================================================================

    /// Plays turns until the enemies are wiped (None) or the party is
    /// (the campaign outcome).
    fn fight_out(
        &mut self,
        ctrl: &mut dyn Controller,
    ) -> Result<Option<CampaignOutcome>, EngineError> {
        loop {
            self.start_turn(ctrl);
            self.player_phase(ctrl)?;
            self.enemy_phase()?;
            if let Some(outcome) = self.end_turn(ctrl)? {
                return Ok(Some(outcome));
            }
            // Kills from end-of-turn items are settled before the win check
            // and never feed the next turn's death accounting.
            self.party.sweep_corpses();
            self.enemies.sweep_corpses();
            if self.enemies.is_empty() {
                return Ok(None);
            }
        }
    }

    fn start_turn(&mut self, ctrl: &mut dyn Controller) {
        ctrl.battlefield(self.turn, &self.party, &self.enemies);
        for member in self.party.iter_mut() {
            member.start_of_turn_cleanup();
        }
        for foe in self.enemies.iter_mut() {
            foe.start_of_turn_cleanup();
        }
    }

    fn player_phase(&mut self, ctrl: &mut dyn Controller) -> Result<(), EngineError> {
        for idx in self.party.living_indices() {
            // Friendly fire earlier in the phase may have dropped this one.
            if !self.party[idx].is_alive() {
                continue;
            }
            if self.enemies.living_count() == 0 {
                break;
            }
            if self.party[idx].has_effect(EffectKind::Stun) {
                ctrl.note(&format!("{} is stunned and skips the turn.", self.party[idx].name()));
                continue;
            }
            match ctrl.action_choice(&self.party[idx])? {
                1 => abilities::player::cast_slot_one(
                    idx,
                    &mut self.party,
                    &mut self.enemies,
                    &mut self.rng,
                    &self.config,
                    ctrl,
                )?,
                2 => abilities::player::cast_slot_two(
                    idx,
                    &mut self.party,
                    &mut self.enemies,
                    &mut self.rng,
                    &self.config,
                    ctrl,
                )?,
                _ => {
                    let target = chosen_index(ctrl, &self.enemies)?;
                    basic_attack(&self.party, idx, &mut self.enemies, target);
                }
            }
        }
        Ok(())
    }

    fn enemy_phase(&mut self) -> Result<(), CombatError> {
        for idx in self.enemies.living_indices() {
            if !self.enemies[idx].is_alive() {
                continue;
            }
            if self.party.living_count() == 0 {
                break;
            }
            // Stun gate keyed by effect id on this side.
            if self.enemies[idx].has_effect_id(2) {
                continue;
            }
            match self.rng.below(3) {
                0 => {
                    if let Some(target) = random_index(&mut self.rng, &self.party) {
                        basic_attack(&self.enemies, idx, &mut self.party, target);
                    }
                }
                1 => abilities::enemy::cast_slot_one(
                    idx,
                    &mut self.enemies,
                    &mut self.party,
                    &mut self.rng,
                    &self.config,
                )?,
                _ => abilities::enemy::cast_slot_two(
                    idx,
                    &mut self.enemies,
                    &mut self.party,
                    &mut self.rng,
                    &self.config,
                )?,
            }
        }
        Ok(())
    }

    /// End-of-turn pipeline, in fixed order: effect ticks, corpse sweep and
    /// snowballing accounting, wipe check, turn advance, milestone payouts,
    /// last-stand payout, item offer.
    fn end_turn(
        &mut self,
        ctrl: &mut dyn Controller,
    ) -> Result<Option<CampaignOutcome>, EngineError> {
        for member in self.party.iter_mut() {
            member.tick_effects();
        }
        for foe in self.enemies.iter_mut() {
            foe.tick_effects();
        }

        let fielded_before = self.enemies.len();
        self.party.sweep_corpses();
        self.enemies.sweep_corpses();
        if self.enemies.len() < fielded_before {
            for _ in 0..self.cards.count(CardKind::Snowballing) {
                if let Some(target) = random_index(&mut self.rng, &self.party) {
                    self.party[target].attach(EffectKind::Strong, 1);
                }
            }
        }

        if self.party.is_empty() {
            info!(battles = self.battles, "party wiped");
            return Ok(Some(CampaignOutcome { battles_survived: self.battles }));
        }

        self.turn += 1;
        if self.turn == self.synergy_milestone {
            self.run_synergies()?;
            self.synergy_milestone += self.config.synergy_step;
        }
        if self.turn == self.recovery_milestone {
            let hp = self.cards.count(CardKind::Regeneration);
            let sp = self.cards.count(CardKind::Restoration);
            for member in self.party.iter_mut() {
                member.change_hp(hp);
                member.change_sp(sp)?;
            }
            self.recovery_milestone += self.config.recovery_step;
        }
        if self.turn == self.config.gift_turn {
            let payout = self.config.gift_payout * self.cards.count(CardKind::Gift);
            for member in self.party.iter_mut() {
                member.change_hp(payout);
            }
        }
        if self.party.len() == 1 && !self.last_stand {
            self.last_stand = true;
            let payout = self.config.last_payout * self.cards.count(CardKind::Last);
            if let Some(last_one) = self.party.first_mut() {
                last_one.change_hp(payout);
            }
        }

        self.offer_item(ctrl)?;
        Ok(None)
    }

    /// Party-composition synergies, checked over every ordered pair of
    /// members. A pair that matches in both orders pays out twice.
    fn run_synergies(&mut self) -> Result<(), CombatError> {
        let lineup: Vec<Identity> = self.party.iter().map(|c| c.identity()).collect();
        for a in &lineup {
            for b in &lineup {
                let fields = |x: Identity, y: Identity| {
                    (*a == x || *b == x) && (*a == y || *b == y)
                };
                if fields(Identity::Tasque, Identity::Agent007n7) {
                    for idx in self.enemies.living_indices() {
                        let kind = *self.rng.pick(&DEBUFF_POOL);
                        self.enemies[idx].attach(kind, 1);
                    }
                }
                if fields(Identity::Isaac, Identity::Doombringer) {
                    for member in self.party.iter_mut() {
                        member.attach(EffectKind::Tough, 1);
                    }
                }
                if fields(Identity::Flutter, Identity::Leafy) {
                    for member in self.party.iter_mut() {
                        member.change_hp(1);
                    }
                }
                if fields(Identity::Chance, Identity::Default) && self.rng.below(4) == 0 {
                    for member in self.party.iter_mut() {
                        member.change_sp(1)?;
                        member.attach(EffectKind::Strong, 1);
                    }
                }
            }
        }
        Ok(())
    }

    fn offer_item(&mut self, ctrl: &mut dyn Controller) -> Result<(), EngineError> {
        if self.items.is_empty() || !ctrl.wants_item()? {
            return Ok(());
        }
        let id = ctrl.item_pick(self.items.items())?;
        let Some(kind) = ItemKind::from_id(id) else {
            return Ok(());
        };
        if self.items.remove_one(kind) {
            apply_item(kind, &mut self.party, &mut self.enemies, &mut self.rng)?;
        }
        Ok(())
    }

    // ========================================================================
    // Between battles
    // ========================================================================

    fn break_time(&mut self, ctrl: &mut dyn Controller) {
        for member in self.party.iter_mut() {
            member.full_restore();
            member.clear_effects();
        }
        self.battles += 1;
        self.coins += self.config.battle_reward;
        info!(battles = self.battles, coins = self.coins, "battle won");
        ctrl.battle_won(&self.party, self.cards.cards(), self.coins);
    }

    fn shop(&mut self, ctrl: &mut dyn Controller) -> Result<(), EngineError> {
        if self.coins < self.config.item_price {
            return Ok(());
        }
        if let Some(kind) = ctrl.shop_pick(self.coins)?.and_then(ItemKind::from_id) {
            self.items.add(kind);
            self.coins -= self.config.item_price;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FixedOracle, ScriptedController};
    use super::*;
    use crate::env::CharacterTemplate;

    fn oracle() -> FixedOracle {
        FixedOracle::new([
            CharacterTemplate::bare(0, Identity::Default, 10, 5),
            CharacterTemplate::bare(1, Identity::Leafy, 8, 6),
            CharacterTemplate::bare(2, Identity::Doombringer, 12, 6),
        ])
    }

    fn engine(oracle: &FixedOracle) -> Engine<'_> {
        Engine::new(oracle, GameConfig::default(), GameRng::seeded(42))
    }

    fn member(identity: Identity) -> Combatant {
        Combatant::from_template(&CharacterTemplate::bare(identity as u8, identity, 10, 5))
    }

    #[test]
    fn recruit_retries_until_an_offered_id() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        // All three templates are always on offer with an empty party, so
        // id 1 is valid; 99 never is.
        let mut ctrl = ScriptedController::new().with_recruits([99, 1]);
        engine.recruit(&mut ctrl).unwrap();
        assert_eq!(engine.party().len(), 1);
        assert_eq!(engine.party()[0].identity(), Identity::Leafy);
        assert_eq!(ctrl.notes.len(), 1);
    }

    #[test]
    fn spawned_enemies_never_repeat_a_template() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        for _ in 0..5 {
            engine.spawn_enemy();
        }
        assert_eq!(engine.enemies().len(), 3);
        for template_id in 0..3 {
            assert!(engine.enemies().contains_character(template_id));
        }
    }

    #[test]
    fn draft_effects_land_at_acquisition() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party.push(member(Identity::Leafy));

        engine.acquire_card(CardKind::Bulk);
        assert!(engine.party.iter().all(|m| m.max_hp() == 11));

        engine.acquire_card(CardKind::Exchange);
        assert!(engine.party.iter().all(|m| m.max_hp() == 10 && m.max_sp() == 6));

        engine.acquire_card(CardKind::Payday);
        assert_eq!(engine.coins(), 2);

        engine.acquire_card(CardKind::Bloodprice);
        assert!(engine.party.iter().all(|m| m.max_hp() == 9));
        assert_eq!(engine.coins(), 7);

        engine.acquire_card(CardKind::Gift);
        assert_eq!(engine.cards.count(CardKind::Gift), 1);
        assert_eq!(engine.coins(), 7);
    }

    #[test]
    fn stunned_member_takes_no_action() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party[0].attach(EffectKind::Stun, 1);
        engine.enemies.push(member(Identity::Leafy));
        let mut ctrl = ScriptedController::new();
        engine.player_phase(&mut ctrl).unwrap();
        assert_eq!(engine.enemies()[0].hp(), 10);
        assert_eq!(engine.party()[0].sp(), 5);
    }

    #[test]
    fn invalid_action_choice_falls_back_to_basic() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.enemies.push(member(Identity::Leafy));
        let mut ctrl = ScriptedController::new()
            .with_actions([7])
            .with_targets(["Leafy"]);
        engine.player_phase(&mut ctrl).unwrap();
        assert_eq!(engine.enemies()[0].hp(), 9);
        assert_eq!(engine.party()[0].sp(), 5);
    }

    #[test]
    fn enemy_phase_skips_stunned_foes() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.enemies.push(member(Identity::Doombringer));
        engine.enemies[0].attach(EffectKind::Stun, 1);
        engine.enemy_phase().unwrap();
        assert_eq!(engine.party()[0].hp(), 10);
        assert_eq!(engine.enemies()[0].sp(), 5);
    }

    #[test]
    fn wipe_reports_battles_survived() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.battles = 6;
        engine.party.push(member(Identity::Default));
        engine.party[0].change_hp(-9);
        engine.party[0].attach(EffectKind::Fire, 1);
        let mut ctrl = ScriptedController::new();
        let outcome = engine.end_turn(&mut ctrl).unwrap();
        assert_eq!(outcome, Some(CampaignOutcome { battles_survived: 6 }));
    }

    #[test]
    fn snowballing_pays_per_card_on_enemy_death() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party.push(member(Identity::Leafy));
        engine.enemies.push(member(Identity::Doombringer));
        engine.enemies[0].change_hp(-12);
        engine.cards.add(CardKind::Snowballing);
        engine.cards.add(CardKind::Snowballing);
        let mut ctrl = ScriptedController::new();
        engine.end_turn(&mut ctrl).unwrap();
        let strong_total: usize = engine
            .party()
            .iter()
            .map(|m| m.effects().iter().filter(|e| e.kind == EffectKind::Strong).count())
            .sum();
        assert_eq!(strong_total, 2);
    }

    #[test]
    fn recovery_milestone_pays_and_reschedules() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party[0].change_hp(-5);
        engine.party[0].change_sp(-3).unwrap();
        engine.cards.add(CardKind::Regeneration);
        engine.cards.add(CardKind::Regeneration);
        engine.cards.add(CardKind::Restoration);
        engine.turn = 14;
        let mut ctrl = ScriptedController::new();
        engine.end_turn(&mut ctrl).unwrap();
        assert_eq!(engine.party()[0].hp(), 7);
        assert_eq!(engine.party()[0].sp(), 3);
        assert_eq!(engine.recovery_milestone, 30);
    }

    #[test]
    fn gift_pays_on_its_turn() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party[0].change_hp(-8);
        engine.cards.add(CardKind::Gift);
        engine.cards.add(CardKind::Gift);
        engine.turn = 2;
        let mut ctrl = ScriptedController::new();
        engine.end_turn(&mut ctrl).unwrap();
        assert_eq!(engine.party()[0].hp(), 8);
    }

    #[test]
    fn last_stand_pays_once() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party[0].change_hp(-7);
        engine.cards.add(CardKind::Last);
        let mut ctrl = ScriptedController::new();
        engine.end_turn(&mut ctrl).unwrap();
        assert_eq!(engine.party()[0].hp(), 8);
        engine.end_turn(&mut ctrl).unwrap();
        assert_eq!(engine.party()[0].hp(), 8);
    }

    #[test]
    fn paired_synergy_triggers_in_both_orders() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Isaac));
        engine.party.push(member(Identity::Doombringer));
        engine.run_synergies().unwrap();
        for member in engine.party().iter() {
            let tough = member
                .effects()
                .iter()
                .filter(|e| e.kind == EffectKind::Tough)
                .count();
            assert_eq!(tough, 2);
        }
    }

    #[test]
    fn item_offer_consumes_exactly_one_instance() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.enemies.push(member(Identity::Leafy));
        engine.items.add(ItemKind::FragGrenade);
        engine.items.add(ItemKind::FragGrenade);
        let mut ctrl = ScriptedController::new()
            .with_item_offers([true])
            .with_item_picks([ItemKind::FragGrenade.id()]);
        engine.offer_item(&mut ctrl).unwrap();
        assert_eq!(engine.enemies()[0].hp(), 7);
        assert_eq!(engine.items.items().len(), 1);
    }

    #[test]
    fn shop_ignores_unknown_ids_and_keeps_coins() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.coins = 6;
        let mut ctrl = ScriptedController::new().with_shop_picks([Some(42)]);
        engine.shop(&mut ctrl).unwrap();
        assert_eq!(engine.coins(), 6);
        assert!(engine.items.is_empty());

        let mut ctrl = ScriptedController::new().with_shop_picks([Some(0)]);
        engine.shop(&mut ctrl).unwrap();
        assert_eq!(engine.coins(), 1);
        assert_eq!(engine.items.items(), &[ItemKind::HealthPotion]);

        // Broke now: the shop does not even ask.
        let mut ctrl = ScriptedController::new();
        engine.shop(&mut ctrl).unwrap();
        assert_eq!(engine.coins(), 1);
    }

    #[test]
    fn item_kill_ends_the_battle_without_snowballing() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.party[0].change_hp(-4);
        engine.party[0].attach(EffectKind::Stun, 3);
        engine.enemies.push(member(Identity::Leafy));
        engine.enemies[0].change_hp(-7);
        engine.enemies[0].attach(EffectKind::Stun, 3);
        engine.cards.add(CardKind::Snowballing);
        engine.items.add(ItemKind::FragGrenade);

        // Both sides are stunned, so the only action this turn is the
        // end-of-turn grenade, which finishes the last enemy.
        let mut ctrl = ScriptedController::new()
            .with_item_offers([true])
            .with_item_picks([ItemKind::FragGrenade.id()]);
        let outcome = engine.fight_out(&mut ctrl).unwrap();
        assert_eq!(outcome, None);
        assert!(engine.enemies().is_empty());

        // The kill happened after the death accounting, so the held
        // Snowballing card pays nothing.
        let strong_total: usize = engine
            .party()
            .iter()
            .map(|m| m.effects().iter().filter(|e| e.kind == EffectKind::Strong).count())
            .sum();
        assert_eq!(strong_total, 0);

        engine.break_time(&mut ctrl);
        assert_eq!(engine.party()[0].hp(), 10);
        assert_eq!(engine.party()[0].sp(), 5);
        assert!(engine.party()[0].effects().is_empty());
        assert_eq!(engine.battles(), 1);
        assert_eq!(engine.coins(), 1);
    }

    #[test]
    fn vanguard_tax_then_basic_attack_leaves_four() {
        let oracle = oracle();
        let mut engine = engine(&oracle);
        engine.party.push(member(Identity::Default));
        engine.enemies.push(member(Identity::Leafy));
        if let Some(vanguard) = engine.party.first_mut() {
            vanguard.change_hp(-engine.config.vanguard_tax);
        }
        basic_attack(&engine.enemies, 0, &mut engine.party, 0);
        assert_eq!(engine.party()[0].hp(), 4);
    }
}
