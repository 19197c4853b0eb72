use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentKey;
use crate::values::{Percent, Price};

/// Final relative performance of one instrument over the evaluation window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// 1-based position in the ranking
    pub rank: usize,
    pub key: InstrumentKey,
    pub name: String,
    pub baseline_price: Price,
    pub end_price: Price,
    /// Price change since the baseline, in percent
    pub change_pct: Percent,
    /// Ticks the feed produced between baseline and evaluation end
    pub elapsed_ticks: usize,
    /// Value the ranking is sorted by (depends on the scoring rule)
    pub performance: Decimal,
}
