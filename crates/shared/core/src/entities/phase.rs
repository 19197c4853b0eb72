use serde::{Deserialize, Serialize};

/// Session phase. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Player studies the instruments
    #[default]
    Analysis,
    /// Short selection window
    Thinking,
    /// Fixed evaluation window after selection
    Evaluating,
    /// Ranking is shown until restart
    Result,
}

impl Phase {
    /// Whether a one-second countdown runs while this phase is active
    pub fn is_timed(&self) -> bool {
        matches!(self, Phase::Thinking | Phase::Evaluating)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Analysis => "analysis",
            Phase::Thinking => "thinking",
            Phase::Evaluating => "evaluating",
            Phase::Result => "result",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
