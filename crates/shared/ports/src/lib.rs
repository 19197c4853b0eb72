//! Foresight Ports
//!
//! Port definitions (traits) for the Foresight prediction game.
//! These define the boundaries between game logic and infrastructure.

mod clock;
mod error;
mod feed;
mod scoring;

pub use clock::Clock;
pub use error::{FeedError, FeedResult};
pub use feed::MarketFeed;
pub use scoring::ScoringRule;
