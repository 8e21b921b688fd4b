//! Campaign tuning knobs.
//!
//! Defaults match the original balance. Everything here is data, not
//! behavior; the turn engine reads these and never hardcodes the numbers.

/// Fixed campaign parameters.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Party size above which generated battles draft a card instead of
    /// recruiting.
    pub party_cap: usize,
    /// Enemies generated per open-ended battle.
    pub generated_enemies: usize,
    /// Raw HP hit on the party's first member when a generated battle opens.
    pub vanguard_tax: i32,
    /// First synergy milestone and its repeat step.
    pub synergy_step: u32,
    /// First regeneration/restoration milestone and its repeat step.
    pub recovery_step: u32,
    /// Turn on which Gift cards pay out.
    pub gift_turn: u32,
    /// HP payout per Gift card held.
    pub gift_payout: i32,
    /// HP payout per Last card held when the party drops to one member.
    pub last_payout: i32,
    /// Coins awarded for winning a battle.
    pub battle_reward: u32,
    /// Price of every shop item.
    pub item_price: u32,
    /// Inclusive bounds of Chance's max-HP reroll.
    pub reroll_min: i32,
    pub reroll_max: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            party_cap: 4,
            generated_enemies: 4,
            vanguard_tax: 5,
            synergy_step: 10,
            recovery_step: 15,
            gift_turn: 3,
            gift_payout: 3,
            last_payout: 5,
            battle_reward: 1,
            item_price: 5,
            reroll_min: 3,
            reroll_max: 35,
        }
    }
}
