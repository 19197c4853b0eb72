use foresight_core::{BaselineEntry, InstrumentState, Percent};
use rust_decimal::Decimal;

/// Port for the scoring formula
///
/// The engine computes the percentage change and the number of elapsed
/// ticks; a rule turns them into the value the ranking is sorted by.
pub trait ScoringRule: Send + Sync {
    /// Rule name for logging
    fn name(&self) -> &str;

    /// Performance value for one instrument
    fn performance(
        &self,
        baseline: &BaselineEntry,
        end: &InstrumentState,
        change_pct: Percent,
        elapsed_ticks: usize,
    ) -> Decimal;
}
