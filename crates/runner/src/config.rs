//! Game configuration loading
//!
//! One JSON document with every field defaulted, so `{}` is a valid game:
//!
//! ```json
//! {
//!   "session": { "thinking_secs": 3, "evaluation_secs": 10, "leader_poll_ms": 300 },
//!   "feed": { "volatility": 0.01, "tick_interval_ms": 500, "seed": 42 },
//!   "scoring": "percent_change"
//! }
//! ```

use foresight_feed::FeedConfig;
use foresight_scoring::{PercentChange, ScoringEngine, TickNormalized};
use foresight_session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Performance formula used to rank instruments at the end of a cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Raw percentage change since the baseline
    #[default]
    PercentChange,
    /// Percentage change per elapsed tick
    TickNormalized,
}

impl ScoringMode {
    pub fn engine(self) -> ScoringEngine {
        match self {
            ScoringMode::PercentChange => ScoringEngine::new(PercentChange),
            ScoringMode::TickNormalized => ScoringEngine::new(TickNormalized),
        }
    }
}

/// Root configuration for the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Phase timer lengths
    pub session: SessionConfig,
    /// Simulated market
    pub feed: FeedConfig,
    /// Ranking formula
    pub scoring: ScoringMode,
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.feed
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
