//! Built-in scoring rules

use foresight_core::{BaselineEntry, InstrumentState, Percent};
use foresight_ports::ScoringRule;
use rust_decimal::Decimal;

/// Performance is the plain percentage change since the baseline
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentChange;

impl ScoringRule for PercentChange {
    fn name(&self) -> &str {
        "percent-change"
    }

    fn performance(
        &self,
        _baseline: &BaselineEntry,
        _end: &InstrumentState,
        change_pct: Percent,
        _elapsed_ticks: usize,
    ) -> Decimal {
        change_pct
    }
}

/// Percentage change per elapsed feed tick
///
/// Falls back to the raw change when the feed did not tick at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickNormalized;

impl ScoringRule for TickNormalized {
    fn name(&self) -> &str {
        "tick-normalized"
    }

    fn performance(
        &self,
        _baseline: &BaselineEntry,
        _end: &InstrumentState,
        change_pct: Percent,
        elapsed_ticks: usize,
    ) -> Decimal {
        if elapsed_ticks == 0 {
            return change_pct;
        }
        (change_pct / Decimal::from(elapsed_ticks)).round_dp(6)
    }
}
