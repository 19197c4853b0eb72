use async_trait::async_trait;
use foresight_core::FeedSnapshot;

use crate::FeedResult;

/// Port for the market feed
///
/// The feed updates at its own cadence. The game only ever reads owned
/// point-in-time copies through [`MarketFeed::snapshot`]; it never holds a
/// live reference into the feed's state.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Start producing updates
    async fn start(&self) -> FeedResult<()>;

    /// Stop producing updates. Snapshots remain available.
    async fn stop(&self);

    /// Copy of every instrument's current state
    async fn snapshot(&self) -> FeedSnapshot;
}
