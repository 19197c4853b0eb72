//! Line-oriented player commands

use foresight_core::{InstrumentKey, PlayerAction};
use std::str::FromStr;
use thiserror::Error;

/// One parsed stdin line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(PlayerAction),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("'{0}' needs an instrument key")]
    MissingKey(&'static str),

    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    /// `confirm`, `select KEY`, `focus KEY`, `restart`, `quit`
    /// (case-insensitive verbs, keys taken verbatim)
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let key = parts.next().map(InstrumentKey::from);

        match verb.as_str() {
            "confirm" | "c" => Ok(Command::Action(PlayerAction::ConfirmPrediction)),
            "select" | "s" => key
                .map(|k| Command::Action(PlayerAction::SelectInstrument(k)))
                .ok_or(CommandError::MissingKey("select")),
            "focus" | "f" => key
                .map(|k| Command::Action(PlayerAction::Focus(k)))
                .ok_or(CommandError::MissingKey("focus")),
            "restart" | "r" => Ok(Command::Action(PlayerAction::Restart)),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}
