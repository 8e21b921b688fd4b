//! Fatal engine errors.
//!
//! Losing the campaign is not an error; it is reported as a normal
//! [`super::CampaignOutcome`]. Errors here end the process.

use crate::state::CombatError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    /// The player typed something non-numeric at a strict numeric prompt.
    #[error("expected a number at the {prompt} prompt")]
    NotANumber { prompt: &'static str },

    /// The input stream ended mid-prompt.
    #[error("input stream closed mid-game")]
    InputClosed,
}
