use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentKey;

/// Actions the player can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "key", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Leave analysis and open the selection window
    ConfirmPrediction,
    /// Commit to an instrument (only accepted while thinking)
    SelectInstrument(InstrumentKey),
    /// Highlight an instrument without committing to it
    Focus(InstrumentKey),
    /// Start over from analysis
    Restart,
}

impl PlayerAction {
    /// Short name for logs and rejection errors
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::ConfirmPrediction => "confirm_prediction",
            PlayerAction::SelectInstrument(_) => "select_instrument",
            PlayerAction::Focus(_) => "focus",
            PlayerAction::Restart => "restart",
        }
    }
}
