use chrono::{Duration, Utc};
use foresight_core::Timestamp;
use foresight_ports::Clock;
use std::sync::{Arc, Mutex};

/// Fixed clock that only moves when told to
///
/// Used for deterministic tests: baselines and snapshots get exactly the
/// timestamp the test expects.
pub struct ManualClock {
    current: Mutex<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `initial_time` (or the current wall time)
    pub fn new(initial_time: Option<Timestamp>) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(initial_time.unwrap_or_else(Utc::now)),
        })
    }

    /// Move time forward
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Explicitly set the time
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
