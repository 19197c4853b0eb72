//! Foresight Market Feed
//!
//! Simulated price source for the game. The feed owns the instrument
//! states and updates them from its own task; everyone else reads
//! point-in-time copies through the [`MarketFeed`] port.
//!
//! ```text
//!   tick task ──(interval)──► PriceWalk::step ──► metrics::compute
//!                                   │
//!                                   ▼
//!                     RwLock<Vec<InstrumentState>>
//!                                   │
//!                     snapshot() ───┘  (owned copy)
//! ```
//!
//! - [`SimulatedFeed`]: random walk driven by a tokio interval
//! - [`ScriptedFeed`]: prices set by hand, for tests and replays

pub mod config;
pub mod metrics;
pub mod scripted;
pub mod simulated;
pub mod walk;

pub use config::{FeedConfig, InstrumentConfig, MAX_INITIAL_PRICE};
pub use foresight_ports::{FeedError, FeedResult, MarketFeed};
pub use scripted::ScriptedFeed;
pub use simulated::SimulatedFeed;
pub use walk::PriceWalk;
