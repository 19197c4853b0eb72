//! Foresight Scoring
//!
//! Pure functions the session invokes at phase boundaries:
//!
//! - **Baseline**: freeze `{key → price, history length}` at selection time
//! - **Engine**: rank instruments by performance since the baseline
//! - **Leader**: pick the live best instrument during evaluation
//!
//! ```text
//!  selection ──► capture_baseline(feed) ──► BaselineSnapshot
//!                                                │
//!  evaluation end ──► feed snapshot ──► score(baseline, end, rule)
//!                                                │
//!                                                ▼
//!                                        Vec<ScoreRecord> (ranked)
//! ```
//!
//! Nothing here reads the live feed; callers pass owned snapshots.

pub mod baseline;
pub mod engine;
pub mod leader;
pub mod rules;

pub use baseline::{BaselineSlot, capture_baseline};
pub use engine::{ScoringEngine, score};
pub use foresight_ports::ScoringRule;
pub use leader::select_leader;
pub use rules::{PercentChange, TickNormalized};
