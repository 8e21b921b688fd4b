//! Ordered rosters of combatants.
//!
//! Order is display/iteration order. The corpse sweep is the only path that
//! removes a combatant; everything else (targeting, phase iteration) merely
//! skips the dead.

use std::ops::{Index, IndexMut};

use super::combatant::Combatant;
use crate::env::CharacterId;

/// One side of a battle.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    members: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, combatant: Combatant) {
        self.members.push(combatant);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    /// Living members, in roster order.
    pub fn living(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter().filter(|c| c.is_alive())
    }

    pub fn living_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut().filter(|c| c.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// Indices of living members, for iteration that mutates along the way.
    pub fn living_indices(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Exact-name lookup among living members.
    pub fn living_index_by_name(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|c| c.is_alive() && c.name() == name)
    }

    pub fn contains_character(&self, id: CharacterId) -> bool {
        self.members.iter().any(|c| c.id() == id)
    }

    /// The roster's first member (the vanguard slot), if any.
    pub fn first_mut(&mut self) -> Option<&mut Combatant> {
        self.members.first_mut()
    }

    /// Removes every dead member. Idempotent: with no intervening state
    /// change a second sweep removes nothing.
    pub fn sweep_corpses(&mut self) {
        self.members.retain(|c| c.is_alive());
    }

    /// Empties the roster entirely (battle reset).
    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl Index<usize> for Roster {
    type Output = Combatant;

    fn index(&self, index: usize) -> &Combatant {
        &self.members[index]
    }
}

impl IndexMut<usize> for Roster {
    fn index_mut(&mut self, index: usize) -> &mut Combatant {
        &mut self.members[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CharacterTemplate;
    use crate::state::Identity;

    fn roster_of(identities: &[Identity]) -> Roster {
        let mut roster = Roster::new();
        for (i, &identity) in identities.iter().enumerate() {
            roster.push(Combatant::from_template(&CharacterTemplate::bare(
                i as u8, identity, 10, 5,
            )));
        }
        roster
    }

    #[test]
    fn sweep_is_idempotent() {
        let mut roster = roster_of(&[Identity::Default, Identity::Leafy, Identity::Onyx]);
        roster[1].change_hp(-10);
        roster.sweep_corpses();
        assert_eq!(roster.len(), 2);
        roster.sweep_corpses();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].identity(), Identity::Default);
        assert_eq!(roster[1].identity(), Identity::Onyx);
    }

    #[test]
    fn name_lookup_skips_the_dead() {
        let mut roster = roster_of(&[Identity::Default, Identity::Leafy]);
        assert_eq!(roster.living_index_by_name("Leafy"), Some(1));
        roster[1].change_hp(-10);
        assert_eq!(roster.living_index_by_name("Leafy"), None);
        assert_eq!(roster.living_index_by_name("Default"), Some(0));
    }

    #[test]
    fn living_indices_reflect_deaths() {
        let mut roster =
            roster_of(&[Identity::Default, Identity::Leafy, Identity::Onyx]);
        roster[0].change_hp(-10);
        assert_eq!(roster.living_indices(), vec![1, 2]);
        assert_eq!(roster.living_count(), 2);
    }
}
