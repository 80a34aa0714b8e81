//! Unit tests for signal aggregation

use chrono::{TimeZone, Utc};
use signatrix::indicators::registry::IndicatorSet;
use signatrix::models::candle::Candle;
use signatrix::models::signal::SignalKind;
use signatrix::models::strategy::{Comparison, Condition, StrategyProfile};
use signatrix::signals::aggregation::aggregate_signals;

fn create_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let price = 100.0 + i as f64 * 0.5;
            Candle::new(
                price,
                price + 0.3,
                price - 0.3,
                price + 0.1,
                1000.0,
                Utc.timestamp_opt(1_735_689_600 + i as i64 * 300, 0).unwrap(),
            )
        })
        .collect()
}

fn threshold(indicator: &str, op: Comparison, value: f64) -> Condition {
    Condition::Threshold {
        indicator: indicator.to_string(),
        op,
        value,
    }
}

fn profile(buy: Vec<Condition>, sell: Vec<Condition>) -> StrategyProfile {
    StrategyProfile {
        id: "test".to_string(),
        indicators: vec![],
        buy_conditions: buy,
        sell_conditions: sell,
    }
}

#[test]
fn all_conditions_met_fires_every_row_at_full_strength() {
    let candles = create_candles(20);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![threshold("PRICE", Comparison::GreaterThan, 0.0)],
        vec![],
    );
    let signals = aggregate_signals(&profile, &set, &candles);
    assert_eq!(signals.len(), 20);
    for signal in &signals {
        assert_eq!(signal.kind, SignalKind::Buy);
        assert_eq!(signal.strength, 1.0);
        assert_eq!(signal.conditions_met, 1);
        assert_eq!(signal.total_conditions, 1);
    }
}

#[test]
fn strength_is_exactly_the_met_ratio() {
    let candles = create_candles(10);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![
            threshold("PRICE", Comparison::GreaterThan, 0.0),
            threshold("PRICE", Comparison::GreaterThan, -1.0),
            threshold("PRICE", Comparison::GreaterThan, 1e12),
        ],
        vec![],
    );
    let signals = aggregate_signals(&profile, &set, &candles);
    assert_eq!(signals.len(), 10);
    for signal in &signals {
        assert_eq!(signal.conditions_met, 2);
        assert_eq!(signal.total_conditions, 3);
        assert_eq!(signal.strength, 2.0 / 3.0);
        assert_eq!(signal.reasons.len(), 2);
    }
}

#[test]
fn rows_below_the_gate_emit_nothing() {
    let candles = create_candles(10);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![
            threshold("PRICE", Comparison::GreaterThan, 0.0),
            threshold("PRICE", Comparison::GreaterThan, 1e12),
        ],
        vec![],
    );
    // 1 of 2 met is 0.5, under the 0.6 gate.
    assert!(aggregate_signals(&profile, &set, &candles).is_empty());
}

#[test]
fn buy_and_sell_may_fire_on_the_same_candle() {
    let candles = create_candles(5);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![threshold("PRICE", Comparison::GreaterThan, 0.0)],
        vec![threshold("PRICE", Comparison::GreaterThan, 0.0)],
    );
    let signals = aggregate_signals(&profile, &set, &candles);
    assert_eq!(signals.len(), 10);
    for pair in signals.chunks(2) {
        assert_eq!(pair[0].time, pair[1].time);
        assert_eq!(pair[0].kind, SignalKind::Buy);
        assert_eq!(pair[1].kind, SignalKind::Sell);
    }
}

#[test]
fn output_is_sorted_ascending_by_time() {
    let candles = create_candles(30);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![threshold("PRICE", Comparison::GreaterThan, 0.0)],
        vec![threshold("PRICE", Comparison::LessThan, 105.0)],
    );
    let signals = aggregate_signals(&profile, &set, &candles);
    for pair in signals.windows(2) {
        assert!(pair[0].time <= pair[1].time);
    }
}

#[test]
fn fully_skipped_rows_never_divide_by_zero() {
    let candles = create_candles(10);
    let set = IndicatorSet::compute(&candles);
    let profile = profile(
        vec![threshold("NOT_COMPUTED", Comparison::LessThan, 0.0)],
        vec![],
    );
    assert!(aggregate_signals(&profile, &set, &candles).is_empty());
}
