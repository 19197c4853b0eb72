use foresight_core::Timestamp;
use std::time::Duration;

/// Source of the timestamps carried by feed snapshots and captured baselines
///
/// The session never reads wall time directly: a feed stamps each
/// [`FeedSnapshot`](foresight_core::FeedSnapshot) with its clock, and the
/// baseline inherits the stamp of the snapshot it was taken from. Swapping
/// in a manual clock makes both deterministic.
pub trait Clock: Send + Sync {
    /// Current time according to this clock
    fn now(&self) -> Timestamp;

    /// Time elapsed since `earlier`, zero if `earlier` is still ahead
    fn elapsed_since(&self, earlier: Timestamp) -> Duration {
        self.now()
            .signed_duration_since(earlier)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Name for log lines
    fn name(&self) -> &str {
        "Clock"
    }
}
