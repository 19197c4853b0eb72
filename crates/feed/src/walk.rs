//! Random-walk price generator

use foresight_core::{InstrumentState, Price};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;

use crate::metrics;

/// Lowest price the walk will produce
const PRICE_FLOOR: Decimal = dec!(0.01);

/// Bounded multiplicative random walk
///
/// Each step moves a price by `price * (1 + volatility * u)` with `u`
/// uniform in `[-1, 1)`.
pub struct PriceWalk {
    volatility: f64,
    window: usize,
    rng: StdRng,
}

impl PriceWalk {
    /// Create a walk seeded from entropy
    pub fn new(volatility: f64, window: usize) -> Self {
        Self {
            volatility,
            window,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible walks
    pub fn with_seed(volatility: f64, window: usize, seed: u64) -> Self {
        Self {
            volatility,
            window,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next price after `current`
    pub fn next_price(&mut self, current: Price) -> Price {
        let u: f64 = self.rng.gen_range(-1.0..1.0);
        let multiplier = Decimal::from_f64(1.0 + self.volatility * u).unwrap_or(Decimal::ONE);
        match current.checked_mul(multiplier) {
            Some(next) => next.round_dp(4).max(PRICE_FLOOR),
            None => {
                log::warn!("[FEED] Price {} out of range, holding", current);
                current
            }
        }
    }

    /// Advance every instrument by one tick: new price, appended history,
    /// recomputed metrics
    pub fn step(&mut self, instruments: &mut [InstrumentState]) {
        for inst in instruments.iter_mut() {
            let price = self.next_price(inst.price);
            inst.record(price);
            inst.metrics = metrics::compute(inst, self.window);
        }
    }
}
