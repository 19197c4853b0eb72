use serde::{Deserialize, Serialize};

use super::{Phase, ScoreRecord};
use crate::instruments::InstrumentKey;

/// Read-only projection of the session for presentation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    /// Remaining seconds of the active timed phase (0 otherwise)
    pub countdown: u32,
    pub selection: Option<InstrumentKey>,
    pub focus: Option<InstrumentKey>,
    /// Live leader, only ever set while evaluating
    pub leader: Option<InstrumentKey>,
    /// Final ranking, only populated in the result phase
    pub scores: Vec<ScoreRecord>,
    /// Identifies the current phase entry
    pub cycle: u64,
}

impl SessionView {
    /// Score record of the player's selection, if it was ranked
    pub fn selected_score(&self) -> Option<&ScoreRecord> {
        let selection = self.selection.as_ref()?;
        self.scores.iter().find(|s| &s.key == selection)
    }
}
