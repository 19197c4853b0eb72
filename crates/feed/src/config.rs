//! Feed configuration

use foresight_core::{InstrumentKey, Price};
use foresight_ports::{FeedError, FeedResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One simulated instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub key: InstrumentKey,
    pub name: String,
    pub initial_price: Price,
}

impl InstrumentConfig {
    pub fn new(key: &str, name: &str, initial_price: Price) -> Self {
        Self {
            key: InstrumentKey::from(key),
            name: name.to_string(),
            initial_price,
        }
    }
}

/// Configuration for the simulated feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Instruments in listing order
    pub instruments: Vec<InstrumentConfig>,
    /// Max relative move per tick (e.g. 0.01 = ±1%)
    pub volatility: f64,
    /// Time between price updates (ms)
    pub tick_interval_ms: u64,
    /// Ticks used for rolling volatility and efficiency
    pub metrics_window: usize,
    /// Seed for reproducible walks; entropy when absent
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            instruments: vec![
                InstrumentConfig::new("NVDA", "Nvidia", dec!(120)),
                InstrumentConfig::new("AAPL", "Apple", dec!(225)),
                InstrumentConfig::new("TSLA", "Tesla", dec!(250)),
                InstrumentConfig::new("MSFT", "Microsoft", dec!(420)),
                InstrumentConfig::new("AMZN", "Amazon", dec!(185)),
                InstrumentConfig::new("GOOG", "Alphabet", dec!(165)),
            ],
            volatility: 0.01,
            tick_interval_ms: 500,
            metrics_window: 20,
            seed: None,
        }
    }
}

/// Largest accepted starting price; keeps the walk and its metrics well
/// inside `Decimal` range
pub const MAX_INITIAL_PRICE: Decimal = dec!(1000000000000);

impl FeedConfig {
    /// Reject configurations the walk cannot run with
    pub fn validate(&self) -> FeedResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(FeedError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.volatility) {
            return Err(FeedError::InvalidConfig(format!(
                "volatility must be in [0, 1), got {}",
                self.volatility
            )));
        }
        if self.metrics_window < 2 {
            return Err(FeedError::InvalidConfig(
                "metrics_window must be at least 2".to_string(),
            ));
        }
        for (i, inst) in self.instruments.iter().enumerate() {
            if inst.initial_price <= Decimal::ZERO {
                return Err(FeedError::InvalidConfig(format!(
                    "instrument {} has non-positive initial price",
                    inst.key
                )));
            }
            if inst.initial_price > MAX_INITIAL_PRICE {
                return Err(FeedError::InvalidConfig(format!(
                    "instrument {} initial price {} exceeds {}",
                    inst.key, inst.initial_price, MAX_INITIAL_PRICE
                )));
            }
            if self.instruments[..i].iter().any(|o| o.key == inst.key) {
                return Err(FeedError::InvalidConfig(format!(
                    "duplicate instrument key {}",
                    inst.key
                )));
            }
        }
        Ok(())
    }
}
