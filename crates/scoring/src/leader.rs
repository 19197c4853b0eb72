//! Live leader selection

use foresight_core::{FeedSnapshot, InstrumentState};

/// Instrument with the highest risk efficiency
///
/// Linear scan in listing order; on equal values the first one seen
/// stays leader. `None` for an empty feed.
pub fn select_leader(snapshot: &FeedSnapshot) -> Option<&InstrumentState> {
    let mut instruments = snapshot.iter();
    let first = instruments.next()?;

    Some(instruments.fold(first, |best, curr| {
        if curr.metrics.risk_efficiency > best.metrics.risk_efficiency {
            curr
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use foresight_core::InstrumentMetrics;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn inst(key: &str, risk_efficiency: Decimal) -> InstrumentState {
        InstrumentState::new(key, key, dec!(1)).with_metrics(InstrumentMetrics {
            risk_efficiency,
            ..Default::default()
        })
    }

    #[test]
    fn test_highest_wins() {
        let snap = FeedSnapshot::new(
            Utc::now(),
            vec![inst("A", dec!(0.5)), inst("B", dec!(2.1)), inst("C", dec!(-1))],
        );
        assert_eq!(select_leader(&snap).map(|i| i.key.as_str()), Some("B"));
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let snap = FeedSnapshot::new(
            Utc::now(),
            vec![inst("Z", dec!(1)), inst("A", dec!(1)), inst("M", dec!(0.9))],
        );
        assert_eq!(select_leader(&snap).map(|i| i.key.as_str()), Some("Z"));
    }

    #[test]
    fn test_all_negative() {
        let snap = FeedSnapshot::new(Utc::now(), vec![inst("A", dec!(-3)), inst("B", dec!(-2))]);
        assert_eq!(select_leader(&snap).map(|i| i.key.as_str()), Some("B"));
    }

    #[test]
    fn test_empty_feed() {
        let snap = FeedSnapshot::new(Utc::now(), Vec::new());
        assert!(select_leader(&snap).is_none());
    }
}
