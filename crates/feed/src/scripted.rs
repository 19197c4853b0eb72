//! Hand-driven feed for tests and replays

use async_trait::async_trait;
use foresight_clock::{Clock, SystemClock};
use foresight_core::{FeedSnapshot, InstrumentKey, InstrumentMetrics, InstrumentState, Price};
use foresight_ports::{FeedResult, MarketFeed};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::metrics;

/// Metrics window used when recomputing after a scripted move
const WINDOW: usize = 20;

/// Feed whose prices only change when the caller says so
///
/// `start()`/`stop()` only flip a flag; nothing moves on its own.
pub struct ScriptedFeed {
    instruments: RwLock<Vec<InstrumentState>>,
    running: AtomicBool,
    clock: Arc<dyn Clock>,
}

impl ScriptedFeed {
    pub fn new(instruments: Vec<InstrumentState>) -> Self {
        Self::with_clock(instruments, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(instruments: Vec<InstrumentState>, clock: Arc<dyn Clock>) -> Self {
        Self {
            instruments: RwLock::new(instruments),
            running: AtomicBool::new(false),
            clock,
        }
    }

    /// Feed with no instruments at all
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Record a new price tick for `key` and recompute its metrics.
    /// Unknown keys are ignored.
    pub async fn push_price(&self, key: &InstrumentKey, price: Price) {
        let mut guard = self.instruments.write().await;
        if let Some(inst) = guard.iter_mut().find(|i| &i.key == key) {
            inst.record(price);
            inst.metrics = metrics::compute(inst, WINDOW);
        }
    }

    /// Record the same number of ticks for every instrument, applying
    /// `prices` where given and repeating the last price elsewhere
    pub async fn push_tick(&self, prices: &[(&str, Price)]) {
        let mut guard = self.instruments.write().await;
        for inst in guard.iter_mut() {
            let price = prices
                .iter()
                .find(|(k, _)| *k == inst.key.as_str())
                .map(|(_, p)| *p)
                .unwrap_or(inst.price);
            inst.record(price);
            inst.metrics = metrics::compute(inst, WINDOW);
        }
    }

    /// Override the risk efficiency signal of one instrument
    pub async fn set_risk_efficiency(&self, key: &InstrumentKey, value: Decimal) {
        let mut guard = self.instruments.write().await;
        if let Some(inst) = guard.iter_mut().find(|i| &i.key == key) {
            inst.metrics = InstrumentMetrics {
                risk_efficiency: value,
                ..inst.metrics
            };
        }
    }

    /// Replace the whole instrument set
    pub async fn replace(&self, instruments: Vec<InstrumentState>) {
        *self.instruments.write().await = instruments;
    }
}

#[async_trait]
impl MarketFeed for ScriptedFeed {
    async fn start(&self) -> FeedResult<()> {
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    async fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot::new(self.clock.now(), self.instruments.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_clock::ManualClock;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_snapshots_stamped_by_clock() {
        let clock = ManualClock::new(None);
        let feed = ScriptedFeed::with_clock(
            vec![InstrumentState::new("A", "Alpha", dec!(100))],
            clock.clone(),
        );

        let first = feed.snapshot().await;
        assert_eq!(first.taken_at, clock.now());

        clock.advance(chrono::Duration::seconds(3));
        let second = feed.snapshot().await;
        assert_eq!(second.taken_at - first.taken_at, chrono::Duration::seconds(3));
    }

    #[tokio::test]
    async fn test_push_tick_keeps_lengths_aligned() {
        let feed = ScriptedFeed::new(vec![
            InstrumentState::new("A", "Alpha", dec!(100)),
            InstrumentState::new("B", "Beta", dec!(50)),
        ]);

        feed.push_tick(&[("A", dec!(101))]).await;
        let snap = feed.snapshot().await;

        assert_eq!(snap.get(&"A".into()).unwrap().price, dec!(101));
        assert_eq!(snap.get(&"B".into()).unwrap().price, dec!(50));
        assert!(snap.iter().all(|i| i.ticks() == 2));
    }

    #[tokio::test]
    async fn test_start_stop_flag() {
        let feed = ScriptedFeed::empty();
        assert!(!feed.is_running());
        feed.start().await.unwrap();
        assert!(feed.is_running());
        feed.stop().await;
        assert!(!feed.is_running());
        assert!(feed.snapshot().await.is_empty());
    }
}
