//! Session timing

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{SessionError, SessionResult};

/// Timer lengths for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Length of the selection window (seconds)
    pub thinking_secs: u32,
    /// Length of the evaluation window (seconds)
    pub evaluation_secs: u32,
    /// Live leader sampling interval (ms)
    pub leader_poll_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            thinking_secs: 3,
            evaluation_secs: 10,
            leader_poll_ms: 300,
        }
    }
}

impl SessionConfig {
    pub fn leader_poll_interval(&self) -> Duration {
        Duration::from_millis(self.leader_poll_ms)
    }

    /// Every timed phase needs at least one tick to expire
    pub fn validate(&self) -> SessionResult<()> {
        if self.thinking_secs == 0 {
            return Err(SessionError::InvalidConfig(
                "thinking_secs must be at least 1".to_string(),
            ));
        }
        if self.evaluation_secs == 0 {
            return Err(SessionError::InvalidConfig(
                "evaluation_secs must be at least 1".to_string(),
            ));
        }
        if self.leader_poll_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "leader_poll_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
