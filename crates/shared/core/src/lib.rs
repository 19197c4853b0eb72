//! Foresight Core Domain
//!
//! Pure domain types for the Foresight prediction game.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BaselineEntry, BaselineSnapshot, Phase, PlayerAction, ScoreRecord, SessionView,
};
pub use instruments::{FeedSnapshot, InstrumentKey, InstrumentMetrics, InstrumentState};
pub use values::{Percent, Price, Timestamp};
