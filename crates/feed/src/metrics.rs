//! Derived analytics
//!
//! Recomputed after every tick. Cost is bounded by `window`: rolling
//! figures (volatility, efficiency) read the last `window` prices, return
//! reads the first and last price, drawdown reads the running peak.
//!
//! All arithmetic is checked. A figure that would overflow reads as zero.

use foresight_core::{InstrumentMetrics, InstrumentState, Price};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const DP: u32 = 4;

/// Compute every metric for an instrument
pub fn compute(state: &InstrumentState, window: usize) -> InstrumentMetrics {
    let history = &state.history;
    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return InstrumentMetrics::default();
    };

    let start = history.len().saturating_sub(window.max(2));
    let recent = &history[start..];

    let return_pct = pct_change(*first, *last).unwrap_or(Decimal::ZERO);
    let volatility = volatility(recent).unwrap_or(Decimal::ZERO);
    let risk_efficiency = if volatility > Decimal::ZERO {
        return_pct
            .checked_div(volatility)
            .map(|r| r.round_dp(DP))
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    InstrumentMetrics {
        return_pct,
        volatility,
        drawdown: drawdown(state.peak, *last),
        efficiency: efficiency(recent).unwrap_or(Decimal::ZERO),
        risk_efficiency,
    }
}

fn pct_change(from: Price, to: Price) -> Option<Decimal> {
    if from.is_zero() {
        return Some(Decimal::ZERO);
    }
    let pct = to.checked_div(from)?.checked_sub(Decimal::ONE)?.checked_mul(dec!(100))?;
    Some(pct.round_dp(DP))
}

/// Sample standard deviation of per-tick percentage returns
fn volatility(prices: &[Price]) -> Option<Decimal> {
    let returns = prices
        .windows(2)
        .filter(|w| !w[0].is_zero())
        .map(|w| pct_change(w[0], w[1]))
        .collect::<Option<Vec<Decimal>>>()?;

    if returns.len() < 2 {
        return Some(Decimal::ZERO);
    }

    let n = Decimal::from(returns.len());
    let mean = returns
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r / n))?;
    let variance = returns.iter().try_fold(Decimal::ZERO, |acc, r| {
        let d = r.checked_sub(mean)?;
        acc.checked_add(d.checked_mul(d)?.checked_div(n - Decimal::ONE)?)
    })?;

    Some(variance.sqrt().unwrap_or(Decimal::ZERO).round_dp(DP))
}

/// Distance below the running peak, in percent
fn drawdown(peak: Price, last: Price) -> Decimal {
    if peak <= Decimal::ZERO || last >= peak {
        return Decimal::ZERO;
    }
    // last < peak, so the ratio stays in [0, 1]
    ((peak - last) / peak * dec!(100)).round_dp(DP)
}

/// Net move over total path length, in percent
fn efficiency(prices: &[Price]) -> Option<Decimal> {
    let path = prices
        .windows(2)
        .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(w[1].checked_sub(w[0])?.abs()))?;
    if path.is_zero() {
        return Some(Decimal::ZERO);
    }
    let (first, last) = (prices.first()?, prices.last()?);
    let net = last.checked_sub(*first)?.abs();
    Some((net.checked_div(path)? * dec!(100)).round_dp(DP))
}
