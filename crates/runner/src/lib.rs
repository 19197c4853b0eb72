//! Foresight Runner - interactive game host
//!
//! Wires the pieces into a playable game:
//!
//! - **Config**: JSON game configuration (timers, feed, scoring rule)
//! - **Bootstrap**: starts the feed and spawns the session driver
//! - **Command**: stdin line parser for player actions
//!
//! ## Architecture
//!
//! ```text
//!   stdin ──► Command ──► SessionHandle ──► SessionDriver ──► watch ──► stdout (JSON)
//!                                               │
//!                                               ▼ snapshot()
//!                                         SimulatedFeed
//! ```

pub mod bootstrap;
pub mod command;
pub mod config;

pub use bootstrap::{BootstrapError, GameBootstrap, GameHandle};
pub use command::{Command, CommandError};
pub use config::{ConfigError, GameConfig, ScoringMode};
