//! Relative-performance scoring

use foresight_core::{BaselineSnapshot, FeedSnapshot, Percent, Price, ScoreRecord};
use foresight_ports::ScoringRule;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::rules::PercentChange;

/// Rank every instrument present in both `baseline` and `end`
///
/// - Instruments missing on either side are left out, never defaulted.
/// - Zero baseline prices are left out (the change is undefined).
/// - Sorted by performance descending, ties by key ascending.
/// - An empty baseline yields an empty ranking.
pub fn score(
    baseline: &BaselineSnapshot,
    end: &FeedSnapshot,
    rule: &dyn ScoringRule,
) -> Vec<ScoreRecord> {
    let mut records: Vec<ScoreRecord> = baseline
        .iter()
        .filter_map(|(key, entry)| {
            let Some(state) = end.get(key) else {
                log::debug!("[SCORE] {} missing from end state, excluded", key);
                return None;
            };
            if entry.price.is_zero() {
                log::debug!("[SCORE] {} has zero baseline price, excluded", key);
                return None;
            }
            let Some(change_pct) = pct_change(entry.price, state.price) else {
                log::warn!(
                    "[SCORE] {} change from {} to {} overflows, excluded",
                    key,
                    entry.price,
                    state.price
                );
                return None;
            };
            let elapsed_ticks = state.ticks().saturating_sub(entry.history_len);

            Some(ScoreRecord {
                rank: 0,
                key: key.clone(),
                name: state.name.clone(),
                baseline_price: entry.price,
                end_price: state.price,
                change_pct,
                elapsed_ticks,
                performance: rule.performance(entry, state, change_pct, elapsed_ticks),
            })
        })
        .collect();

    records.sort_by(|a, b| {
        b.performance
            .cmp(&a.performance)
            .then_with(|| a.key.cmp(&b.key))
    });
    for (i, record) in records.iter_mut().enumerate() {
        record.rank = i + 1;
    }

    records
}

/// Percentage change from `from` to `to` (dp 4); `None` when it does not
/// fit in a `Decimal`
fn pct_change(from: Price, to: Price) -> Option<Percent> {
    to.checked_sub(from)?
        .checked_div(from)?
        .checked_mul(dec!(100))
        .map(|pct| pct.round_dp(4))
}

/// Scoring engine with a pluggable rule
pub struct ScoringEngine {
    rule: Box<dyn ScoringRule>,
}

impl ScoringEngine {
    pub fn new(rule: impl ScoringRule + 'static) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }

    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Rank instruments since `baseline`; no baseline means no ranking
    pub fn score(&self, baseline: Option<&BaselineSnapshot>, end: &FeedSnapshot) -> Vec<ScoreRecord> {
        let Some(baseline) = baseline else {
            log::warn!("[SCORE] No baseline captured, result set is empty");
            return Vec::new();
        };

        let records = score(baseline, end, self.rule.as_ref());
        log::info!(
            "[SCORE] Ranked {} of {} instruments using {}",
            records.len(),
            baseline.len(),
            self.rule.name()
        );
        if let Some(top) = records.first() {
            log::info!("[SCORE] Best: {} ({}%)", top.key, top.change_pct);
        }
        records
    }

    /// Average performance across a ranking (zero when empty)
    pub fn mean_performance(records: &[ScoreRecord]) -> Decimal {
        if records.is_empty() {
            return Decimal::ZERO;
        }
        // Divide first so the sum stays in range
        let n = Decimal::from(records.len());
        records
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.performance / n))
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(PercentChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::capture_baseline;
    use chrono::Utc;
    use foresight_core::InstrumentState;

    fn feed(entries: &[(&str, Decimal, usize)]) -> FeedSnapshot {
        FeedSnapshot::new(
            Utc::now(),
            entries
                .iter()
                .map(|(k, p, len)| {
                    InstrumentState::new(*k, k.to_lowercase(), *p).with_history(vec![*p; *len])
                })
                .collect(),
        )
    }

    #[test]
    fn test_basic_ranking() {
        let baseline = capture_baseline(&feed(&[("A", dec!(100), 5), ("B", dec!(50), 5)]));
        let end = feed(&[("A", dec!(110), 15), ("B", dec!(45), 15)]);

        let records = score(&baseline, &end, &PercentChange);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key.as_str(), "A");
        assert_eq!(records[0].change_pct, dec!(10));
        assert_eq!(records[0].elapsed_ticks, 10);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[1].key.as_str(), "B");
        assert_eq!(records[1].change_pct, dec!(-10));
        assert_eq!(records[1].rank, 2);
    }

    #[test]
    fn test_ties_broken_by_key() {
        let baseline = capture_baseline(&feed(&[
            ("C", dec!(10), 1),
            ("A", dec!(20), 1),
            ("B", dec!(40), 1),
        ]));
        let end = feed(&[("B", dec!(44), 2), ("C", dec!(11), 2), ("A", dec!(22), 2)]);

        let keys: Vec<String> = score(&baseline, &end, &PercentChange)
            .into_iter()
            .map(|r| r.key.0)
            .collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_zero_baseline_price_excluded() {
        let baseline = capture_baseline(&feed(&[("A", dec!(0), 1), ("B", dec!(5), 1)]));
        let end = feed(&[("A", dec!(1), 2), ("B", dec!(6), 2)]);

        let records = score(&baseline, &end, &PercentChange);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key.as_str(), "B");
    }

    #[test]
    fn test_overflowing_change_excluded() {
        let baseline = capture_baseline(&feed(&[("A", dec!(0.01), 1), ("B", dec!(10), 1)]));
        let end = feed(&[
            ("A", Decimal::from_i128_with_scale(10_i128.pow(28), 0), 2),
            ("B", dec!(11), 2),
        ]);

        let records = ScoringEngine::default().score(Some(&baseline), &end);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key.as_str(), "B");
        assert_eq!(records[0].rank, 1);
    }

    #[test]
    fn test_mean_performance_near_limits() {
        let record = |key: &str| ScoreRecord {
            rank: 1,
            key: key.into(),
            name: key.to_string(),
            baseline_price: Decimal::ONE,
            end_price: Decimal::ONE,
            change_pct: Decimal::ZERO,
            elapsed_ticks: 0,
            performance: Decimal::MAX / dec!(1.5),
        };
        // A plain sum of these two would overflow
        let mean = ScoringEngine::mean_performance(&[record("A"), record("B")]);
        assert!(mean > Decimal::MAX / dec!(2));
    }

    #[test]
    fn test_engine_without_baseline() {
        let engine = ScoringEngine::default();
        assert_eq!(engine.rule_name(), "percent-change");
        assert!(engine.score(None, &feed(&[("A", dec!(1), 1)])).is_empty());
    }

    #[test]
    fn test_mean_performance() {
        let baseline = capture_baseline(&feed(&[("A", dec!(100), 1), ("B", dec!(100), 1)]));
        let end = feed(&[("A", dec!(110), 2), ("B", dec!(96), 2)]);
        let records = ScoringEngine::default().score(Some(&baseline), &end);

        assert_eq!(ScoringEngine::mean_performance(&records), dec!(3));
        assert_eq!(ScoringEngine::mean_performance(&[]), Decimal::ZERO);
    }
}
