//! Random-walk feed driven by its own tokio task

use async_trait::async_trait;
use foresight_clock::{Clock, SystemClock};
use foresight_core::{FeedSnapshot, InstrumentState, Timestamp};
use foresight_ports::{FeedResult, MarketFeed};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::FeedConfig;
use crate::metrics;
use crate::walk::PriceWalk;

struct FeedState {
    instruments: Vec<InstrumentState>,
    walk: PriceWalk,
}

/// Tick task plus the clock time it was spawned at
struct Running {
    handle: JoinHandle<()>,
    since: Timestamp,
}

/// Simulated market feed
///
/// `start()` spawns a task that advances every instrument once per
/// `tick_interval_ms`. The instrument states live behind a lock that only
/// that task writes to.
pub struct SimulatedFeed {
    config: FeedConfig,
    state: Arc<RwLock<FeedState>>,
    task: Mutex<Option<Running>>,
    clock: Arc<dyn Clock>,
}

impl SimulatedFeed {
    /// Create a feed using the system clock
    pub fn new(config: FeedConfig) -> FeedResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Create a feed stamping snapshots with `clock`
    pub fn with_clock(config: FeedConfig, clock: Arc<dyn Clock>) -> FeedResult<Self> {
        config.validate()?;

        let instruments = config
            .instruments
            .iter()
            .map(|c| {
                let mut state = InstrumentState::new(c.key.clone(), c.name.clone(), c.initial_price);
                state.metrics = metrics::compute(&state, config.metrics_window);
                state
            })
            .collect();

        let walk = match config.seed {
            Some(seed) => PriceWalk::with_seed(config.volatility, config.metrics_window, seed),
            None => PriceWalk::new(config.volatility, config.metrics_window),
        };

        Ok(Self {
            config,
            state: Arc::new(RwLock::new(FeedState { instruments, walk })),
            task: Mutex::new(None),
            clock,
        })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Advance every instrument by one tick right now
    pub async fn step(&self) {
        Self::advance(&self.state).await;
    }

    pub async fn is_running(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Clock time since the tick task started, `None` while stopped
    pub async fn uptime(&self) -> Option<Duration> {
        let task = self.task.lock().await;
        let running = task.as_ref().filter(|r| !r.handle.is_finished())?;
        Some(self.clock.elapsed_since(running.since))
    }

    async fn advance(state: &RwLock<FeedState>) {
        let mut guard = state.write().await;
        let FeedState { instruments, walk } = &mut *guard;
        walk.step(instruments);
    }

    async fn run(state: Arc<RwLock<FeedState>>, interval_ms: u64) {
        log::info!("Market feed started ({}ms interval)", interval_ms);

        let period = Duration::from_millis(interval_ms);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            Self::advance(&state).await;
            log::trace!("Market feed tick");
        }
    }
}

#[async_trait]
impl MarketFeed for SimulatedFeed {
    async fn start(&self) -> FeedResult<()> {
        let mut task = self.task.lock().await;
        if task.as_ref().is_some_and(|running| !running.handle.is_finished()) {
            log::debug!("Market feed already running");
            return Ok(());
        }

        *task = Some(Running {
            handle: tokio::spawn(Self::run(
                self.state.clone(),
                self.config.tick_interval_ms,
            )),
            since: self.clock.now(),
        });
        Ok(())
    }

    async fn stop(&self) {
        if let Some(running) = self.task.lock().await.take() {
            running.handle.abort();
            log::info!(
                "Market feed stopped after {}ms ({})",
                self.clock.elapsed_since(running.since).as_millis(),
                self.clock.name()
            );
        }
    }

    async fn snapshot(&self) -> FeedSnapshot {
        let instruments = self.state.read().await.instruments.clone();
        FeedSnapshot::new(self.clock.now(), instruments)
    }
}

impl Drop for SimulatedFeed {
    fn drop(&mut self) {
        if let Some(running) = self.task.get_mut().take() {
            running.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstrumentConfig;
    use foresight_clock::ManualClock;
    use rust_decimal_macros::dec;

    fn config() -> FeedConfig {
        FeedConfig {
            instruments: vec![
                InstrumentConfig::new("A", "Alpha", dec!(100)),
                InstrumentConfig::new("B", "Beta", dec!(50)),
            ],
            tick_interval_ms: 100,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_initial_snapshot() {
        let feed = SimulatedFeed::new(config()).unwrap();
        let snap = feed.snapshot().await;

        assert_eq!(snap.len(), 2);
        assert_eq!(snap.instruments[0].key.as_str(), "A");
        assert_eq!(snap.instruments[0].price, dec!(100));
        assert_eq!(snap.instruments[0].ticks(), 1);
    }

    #[tokio::test]
    async fn test_step_grows_history() {
        let feed = SimulatedFeed::new(config()).unwrap();
        feed.step().await;
        feed.step().await;

        let snap = feed.snapshot().await;
        assert!(snap.iter().all(|i| i.ticks() == 3));
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let feed = SimulatedFeed::new(config()).unwrap();
        let before = feed.snapshot().await;
        feed.step().await;

        assert_eq!(before.instruments[0].ticks(), 1);
        assert_eq!(feed.snapshot().await.instruments[0].ticks(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_stop() {
        let feed = SimulatedFeed::new(config()).unwrap();
        feed.start().await.unwrap();
        feed.start().await.unwrap();
        assert!(feed.is_running().await);

        tokio::time::sleep(Duration::from_millis(350)).await;
        let ticks = feed.snapshot().await.instruments[0].ticks();
        assert_eq!(ticks, 4);

        feed.stop().await;
        assert!(!feed.is_running().await);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(feed.snapshot().await.instruments[0].ticks(), ticks);
    }

    #[tokio::test]
    async fn test_uptime_follows_clock() {
        let clock = ManualClock::new(None);
        let feed = SimulatedFeed::with_clock(config(), clock.clone()).unwrap();
        assert_eq!(feed.uptime().await, None);

        feed.start().await.unwrap();
        clock.advance(chrono::Duration::seconds(90));
        assert_eq!(feed.uptime().await, Some(Duration::from_secs(90)));

        // A second start keeps the first start time
        feed.start().await.unwrap();
        assert_eq!(feed.uptime().await, Some(Duration::from_secs(90)));

        feed.stop().await;
        assert_eq!(feed.uptime().await, None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = FeedConfig {
            metrics_window: 1,
            ..config()
        };
        assert!(SimulatedFeed::new(bad).is_err());
    }
}
