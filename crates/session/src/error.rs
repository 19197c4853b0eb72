use foresight_core::{InstrumentKey, Phase};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Action {action} not accepted during {phase}")]
    ActionRejected { action: &'static str, phase: Phase },

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(InstrumentKey),

    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    #[error("Session driver stopped")]
    DriverStopped,
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
