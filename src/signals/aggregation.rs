//! Per-row signal aggregation.

use crate::indicators::registry::IndicatorSet;
use crate::models::candle::Candle;
use crate::models::signal::{Signal, SignalKind};
use crate::models::strategy::{Condition, StrategyProfile};
use crate::strategies::evaluator::evaluate_conditions;

/// Fraction of a row's countable conditions that must hold for a signal.
pub const SIGNAL_STRENGTH_THRESHOLD: f64 = 0.6;

/// Evaluate a profile's buy and sell lists independently at every row and
/// collect the signals that clear the strength gate.
///
/// Buy and sell are not mutually exclusive: both may fire on the same
/// candle. The result is sorted ascending by time; same-row signals keep
/// buy-before-sell order.
pub fn aggregate_signals(
    profile: &StrategyProfile,
    set: &IndicatorSet,
    candles: &[Candle],
) -> Vec<Signal> {
    let mut signals = Vec::new();
    for (i, candle) in candles.iter().enumerate() {
        if let Some(signal) = row_signal(&profile.buy_conditions, SignalKind::Buy, set, candle, i)
        {
            signals.push(signal);
        }
        if let Some(signal) =
            row_signal(&profile.sell_conditions, SignalKind::Sell, set, candle, i)
        {
            signals.push(signal);
        }
    }
    signals.sort_by_key(|s| s.time);
    signals
}

fn row_signal(
    conditions: &[Condition],
    kind: SignalKind,
    set: &IndicatorSet,
    candle: &Candle,
    i: usize,
) -> Option<Signal> {
    let row = evaluate_conditions(conditions, set, i);
    // Rows where every condition was skipped produce nothing.
    if row.total == 0 {
        return None;
    }
    let strength = row.met as f64 / row.total as f64;
    if strength < SIGNAL_STRENGTH_THRESHOLD {
        return None;
    }
    Some(Signal {
        time: candle.timestamp,
        kind,
        strength,
        price: candle.close,
        conditions_met: row.met,
        total_conditions: row.total,
        reasons: row.reasons,
    })
}
