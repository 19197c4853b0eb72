use chrono::{SubsecRound, Utc};
use foresight_core::Timestamp;
use foresight_ports::Clock;

/// Wall clock, truncated to whole milliseconds
///
/// Snapshot and baseline stamps end up in the JSON views; millisecond
/// precision keeps them short and identical across platforms whose
/// system clocks report different sub-millisecond resolution.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().trunc_subsecs(3)
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_stamps_whole_milliseconds() {
        let clock = SystemClock::new();
        for _ in 0..50 {
            assert_eq!(clock.now().timestamp_subsec_nanos() % 1_000_000, 0);
        }
    }

    #[test]
    fn test_elapsed_since() {
        let clock = SystemClock::new();
        let an_hour_ago = clock.now() - Duration::hours(1);
        let elapsed = clock.elapsed_since(an_hour_ago);
        assert!(elapsed >= StdDuration::from_secs(3600));
        assert!(elapsed < StdDuration::from_secs(3660));

        let tomorrow = clock.now() + Duration::days(1);
        assert_eq!(clock.elapsed_since(tomorrow), StdDuration::ZERO);
    }
}
