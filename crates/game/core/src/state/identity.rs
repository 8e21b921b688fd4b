//! The closed set of combatant identities.
//!
//! Ability behavior is keyed by [`Identity`] at definition time. Display
//! names exist only for rendering and for matching player-typed target
//! names; behavior is never re-derived from a string at runtime.

use strum::{Display, EnumIter, EnumString};

/// Every character the catalogs can produce, on either side of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Identity {
    Default,
    Leafy,
    Doombringer,
    Cyan,
    #[strum(serialize = "Jane_Doe")]
    #[serde(rename = "Jane_Doe")]
    JaneDoe,
    Onyx,
    Viper,
    #[strum(serialize = "007n7")]
    #[serde(rename = "007n7")]
    Agent007n7,
    Tasque,
    Isaac,
    #[strum(serialize = "John_Doe")]
    #[serde(rename = "John_Doe")]
    JohnDoe,
    Flutter,
    Chance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn thirteen_identities_exist() {
        assert_eq!(Identity::iter().count(), 13);
    }

    #[test]
    fn display_names_match_targeting_tokens() {
        assert_eq!(Identity::JaneDoe.to_string(), "Jane_Doe");
        assert_eq!(Identity::Agent007n7.to_string(), "007n7");
        assert_eq!("John_Doe".parse::<Identity>().unwrap(), Identity::JohnDoe);
    }
}
