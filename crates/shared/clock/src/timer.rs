use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Period of the phase countdown
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// What a phase timer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// One-second phase countdown
    Countdown,
    /// Live leader sampling
    Poller,
}

/// Periodic timer owned by a single phase entry
///
/// Created when a phase is entered and dropped when it is left; dropping
/// the handle cancels every future tick. The first tick fires one full
/// period after arming, never immediately.
#[derive(Debug)]
pub struct PhaseTimer {
    kind: TimerKind,
    cycle: u64,
    interval: Interval,
}

impl PhaseTimer {
    /// One-second countdown timer for `cycle`
    ///
    /// Missed ticks are delivered in a burst so the count still drops once
    /// per elapsed second.
    pub fn countdown(cycle: u64) -> Self {
        Self::arm(TimerKind::Countdown, COUNTDOWN_PERIOD, cycle, MissedTickBehavior::Burst)
    }

    /// Leader sampling timer for `cycle`
    ///
    /// Missed samples are skipped; only the latest feed state matters.
    pub fn poller(period: Duration, cycle: u64) -> Self {
        Self::arm(TimerKind::Poller, period, cycle, MissedTickBehavior::Skip)
    }

    fn arm(kind: TimerKind, period: Duration, cycle: u64, missed: MissedTickBehavior) -> Self {
        let period = period.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(missed);
        Self {
            kind,
            cycle,
            interval,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Cycle this timer was armed for
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick; yields the armed cycle
    pub async fn tick(&mut self) -> u64 {
        self.interval.tick().await;
        self.cycle
    }
}

/// Tick of an optional timer; pends forever while disarmed
///
/// Lets a `select!` loop keep one branch per timer regardless of whether
/// the owning phase is active.
pub async fn tick_armed(timer: &mut Option<PhaseTimer>) -> u64 {
    match timer {
        Some(t) => t.tick().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let start = Instant::now();
        let mut timer = PhaseTimer::countdown(7);

        assert_eq!(timer.tick().await, 7);
        assert_eq!(start.elapsed(), Duration::from_secs(1));

        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_period() {
        let start = Instant::now();
        let mut timer = PhaseTimer::poller(Duration::from_millis(300), 2);
        assert_eq!(timer.kind(), TimerKind::Poller);

        timer.tick().await;
        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_timer_never_ticks() {
        let mut timer: Option<PhaseTimer> = None;
        let result =
            tokio::time::timeout(Duration::from_secs(60), tick_armed(&mut timer)).await;
        assert!(result.is_err());
    }
}
