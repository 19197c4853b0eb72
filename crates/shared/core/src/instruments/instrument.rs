use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Percent, Price};

/// Unique, stable identifier for an instrument
///
/// Used as map key in baselines and score records, and as the player's
/// selection, without copying the full instrument state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentKey(pub String);

impl InstrumentKey {
    /// Create a new instrument key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstrumentKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstrumentKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Derived analytics recomputed by the feed on every update
///
/// The game core treats these as opaque signals; only `risk_efficiency`
/// is read (by leader selection).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InstrumentMetrics {
    /// Return since the first recorded price, in percent
    pub return_pct: Percent,
    /// Standard deviation of per-tick returns, in percent
    pub volatility: Percent,
    /// Distance below the running peak, in percent
    pub drawdown: Percent,
    /// Net move over path length, in percent
    pub efficiency: Percent,
    /// Return per unit of volatility
    pub risk_efficiency: Decimal,
}

/// Point-in-time state of a single instrument as published by the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentState {
    pub key: InstrumentKey,
    /// Display label, not used for logic
    pub name: String,
    /// Current quote
    pub price: Price,
    /// Past prices, oldest first. Append-only for the lifetime of a session.
    pub history: Vec<Price>,
    /// Highest price in `history`
    #[serde(default)]
    pub peak: Price,
    #[serde(flatten)]
    pub metrics: InstrumentMetrics,
}

impl InstrumentState {
    /// Create an instrument with a single recorded price
    pub fn new(key: impl Into<InstrumentKey>, name: impl Into<String>, price: Price) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            price,
            history: vec![price],
            peak: price,
            metrics: InstrumentMetrics::default(),
        }
    }

    /// Append a tick: new quote, history entry and running peak
    pub fn record(&mut self, price: Price) {
        self.price = price;
        self.history.push(price);
        self.peak = self.peak.max(price);
    }

    /// Number of ticks recorded so far
    pub fn ticks(&self) -> usize {
        self.history.len()
    }

    /// Builder-style override of the history (test fixtures, replays)
    pub fn with_history(mut self, history: Vec<Price>) -> Self {
        if let Some(last) = history.last() {
            self.price = *last;
        }
        self.peak = history.iter().copied().max().unwrap_or(self.price);
        self.history = history;
        self
    }

    /// Builder-style override of the derived metrics
    pub fn with_metrics(mut self, metrics: InstrumentMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}
