//! Line-oriented console controller.
//!
//! Reads whitespace-separated tokens from the input stream and renders
//! everything to stdout. Prompt strictness differs on purpose: recruit and
//! draft prompts re-ask on non-numeric input, while action, item, and shop
//! prompts treat it as fatal.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use clash_content::ContentCatalog;
use clash_core::{
    CardKind, CharacterId, CharacterTemplate, Combatant, Controller, EngineError, ItemKind,
    Roster,
};
use strum::IntoEnumIterator;

pub struct ConsoleController<'a, R: BufRead> {
    catalog: &'a ContentCatalog,
    input: R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> ConsoleController<'a, R> {
    pub fn new(catalog: &'a ContentCatalog, input: R) -> Self {
        Self {
            catalog,
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn token(&mut self) -> Result<String, EngineError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|_| EngineError::InputClosed)?;
            if read == 0 {
                return Err(EngineError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Strict numeric token: anything non-numeric is fatal.
    fn number(&mut self, prompt: &'static str) -> Result<i64, EngineError> {
        self.token()?
            .parse()
            .map_err(|_| EngineError::NotANumber { prompt })
    }

    /// Lenient numeric token: re-asks until a number shows up.
    fn number_retried(&mut self) -> Result<i64, EngineError> {
        loop {
            match self.token()?.parse() {
                Ok(n) => return Ok(n),
                Err(_) => println!("ID has to be an integer."),
            }
        }
    }
}

/// Inline prompt that stays on the same line.
fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

fn render_combatant(combatant: &Combatant) -> String {
    let effects = combatant
        .effects()
        .iter()
        .map(|e| format!("{}{{{}}}", e.kind, e.duration))
        .collect::<Vec<_>>()
        .join(", ");
    if effects.is_empty() {
        format!(
            "[{}] {}/{}HP {}/{}SP",
            combatant.name(),
            combatant.hp(),
            combatant.max_hp(),
            combatant.sp(),
            combatant.max_sp()
        )
    } else {
        format!(
            "[{}] {}/{}HP {}/{}SP ({})",
            combatant.name(),
            combatant.hp(),
            combatant.max_hp(),
            combatant.sp(),
            combatant.max_sp(),
            effects
        )
    }
}

fn render_template(template: &CharacterTemplate) -> String {
    format!(
        "[{}] id {} | {}HP {}SP\n  ({}) {}\n  ({}) {}",
        template.identity,
        template.id,
        template.max_hp,
        template.max_sp,
        template.ability_one.name,
        template.ability_one.description,
        template.ability_two.name,
        template.ability_two.description
    )
}

impl<'a, R: BufRead> Controller for ConsoleController<'a, R> {
    fn battlefield(&mut self, turn: u32, party: &Roster, enemies: &Roster) {
        println!("\n===== Turn {turn} =====");
        println!("Your team:");
        for member in party.iter() {
            println!("  {}", render_combatant(member));
        }
        println!("Enemy team:");
        for foe in enemies.iter() {
            println!("  {}", render_combatant(foe));
        }
    }

    fn action_choice(&mut self, actor: &Combatant) -> Result<u32, EngineError> {
        println!("\n{}", render_combatant(actor));
        println!(
            "What do you wanna do? [0] basic attack [1] {} [2] {}",
            actor.ability_one().name,
            actor.ability_two().name
        );
        prompt(">choice: ");
        let n = self.number("action")?;
        Ok(u32::try_from(n).unwrap_or(0))
    }

    fn target_name(&mut self, candidates: &Roster) -> Result<String, EngineError> {
        let names = candidates
            .living()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Pick a target: {names}");
        prompt(">name: ");
        self.token()
    }

    fn recruit_pick(
        &mut self,
        options: &[CharacterTemplate],
    ) -> Result<CharacterId, EngineError> {
        println!("\nA new face wants to join:");
        for option in options {
            println!("{}", render_template(option));
        }
        println!("Type the id of the character you want to add to your team.");
        prompt(">id: ");
        let n = self.number_retried()?;
        Ok(u8::try_from(n).unwrap_or(u8::MAX))
    }

    fn draft_pick(&mut self, options: &[CardKind]) -> Result<u8, EngineError> {
        println!("\nPick a card:");
        for option in options {
            let blurb = self.catalog.card_description(*option).unwrap_or_default();
            println!("[{}] id {} | {}", option, option.id(), blurb);
        }
        println!("Type the id of the card you want.");
        prompt(">id: ");
        let n = self.number_retried()?;
        Ok(u8::try_from(n).unwrap_or(u8::MAX))
    }

    fn wants_item(&mut self) -> Result<bool, EngineError> {
        println!("Wanna use an item? (yes/no)");
        Ok(self.token()? == "yes")
    }

    fn item_pick(&mut self, held: &[ItemKind]) -> Result<u8, EngineError> {
        println!("Your items:");
        for item in held {
            let blurb = self.catalog.item_description(*item).unwrap_or_default();
            println!("[{}] id {} | {}", item, item.id(), blurb);
        }
        println!("Type the id of the item you wanna use.");
        prompt(">id: ");
        let n = self.number("item")?;
        Ok(u8::try_from(n).unwrap_or(u8::MAX))
    }

    fn shop_pick(&mut self, coins: u32) -> Result<Option<u8>, EngineError> {
        println!("\nThe shop ({coins} coins on hand):");
        for item in ItemKind::iter() {
            let blurb = self.catalog.item_description(item).unwrap_or_default();
            println!("[{}] id {} | {}", item, item.id(), blurb);
        }
        println!("Each costs 5 coins. Type the id of the item you want.");
        prompt(">id: ");
        let n = self.number("shop")?;
        Ok(Some(u8::try_from(n).unwrap_or(u8::MAX)))
    }

    fn battle_won(&mut self, party: &Roster, cards: &[CardKind], coins: u32) {
        println!("\nBattle won! Break time.");
        for member in party.iter() {
            println!("  {}", render_combatant(member));
        }
        let collection = cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Cards: [{collection}]");
        println!("Coins: [{coins}]");
    }

    fn note(&mut self, message: &str) {
        println!("{message}");
    }
}
