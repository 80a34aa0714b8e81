//! End-to-end market scenarios

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use signatrix::indicators::registry::IndicatorSet;
use signatrix::models::candle::Candle;
use signatrix::models::signal::SignalKind;
use signatrix::models::strategy::{Comparison, Condition, StrategyProfile};
use signatrix::signals::aggregation::aggregate_signals;
use signatrix::signals::engine::SignalEngine;
use signatrix::strategies::evaluator::{evaluate_condition, ConditionOutcome};
use signatrix::strategies::registry::ProfileRegistry;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.5,
                close - 0.5,
                close,
                1000.0,
                Utc.timestamp_opt(1_735_689_600 + i as i64 * 300, 0).unwrap(),
            )
        })
        .collect()
}

#[test]
fn flat_closes_pin_rsi_at_100_after_warmup() {
    let candles = candles_from_closes(&vec![100.0; 20]);
    let set = IndicatorSet::compute(&candles);
    let rsi = set.get("RSI").unwrap();
    assert!(rsi[..14].iter().all(|v| v.is_none()));
    assert!(rsi[14..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn steadily_rising_closes_emit_no_reversal_signals() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let candles = candles_from_closes(&closes);
    let registry = ProfileRegistry::builtin().unwrap();
    let profile = registry.get("rsi_reversal").unwrap();
    let analysis = SignalEngine::analyze(&candles, "5m", profile);
    // RSI rides at 100 rather than dipping under 30, and price never drops
    // below its own rising SMA, so neither side ever clears the gate.
    assert!(analysis.signals.is_empty());
}

#[test]
fn a_single_wavetrend_cross_is_flagged_exactly_once() {
    let wt1 = vec![
        Some(-5.0),
        Some(-4.0),
        Some(-3.0),
        Some(-1.0),
        Some(2.0),
        Some(3.0),
        Some(4.0),
    ];
    let wt2 = vec![Some(0.0); 7];
    let mut series = BTreeMap::new();
    series.insert("WAVETREND".to_string(), wt1);
    series.insert("WAVETREND_SIGNAL".to_string(), wt2);
    let set = IndicatorSet::from_parts(series, vec![100.0; 7]);

    let cross = Condition::CrossUp {
        indicator: "WAVETREND".to_string(),
        reference: "WAVETREND_SIGNAL".to_string(),
    };
    for i in 0..7 {
        let outcome = evaluate_condition(&cross, &set, i);
        if i == 4 {
            assert_eq!(outcome, ConditionOutcome::Met);
        } else {
            assert_eq!(outcome, ConditionOutcome::NotMet, "false cross at row {}", i);
        }
    }
}

#[test]
fn a_missing_indicator_never_fires_and_never_crashes() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
    let candles = candles_from_closes(&closes);
    let set = IndicatorSet::compute(&candles);
    let profile = StrategyProfile {
        id: "ghost".to_string(),
        indicators: vec![],
        buy_conditions: vec![Condition::Threshold {
            indicator: "SENTIMENT_SCORE".to_string(),
            op: Comparison::LessThan,
            value: 0.0,
        }],
        sell_conditions: vec![],
    };
    assert!(aggregate_signals(&profile, &set, &candles).is_empty());
}

#[test]
fn buy_and_sell_can_share_a_candle() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64 * 0.1).collect();
    let candles = candles_from_closes(&closes);
    let profile = StrategyProfile {
        id: "both_sides".to_string(),
        indicators: vec![],
        buy_conditions: vec![Condition::Threshold {
            indicator: "PRICE".to_string(),
            op: Comparison::GreaterThan,
            value: 0.0,
        }],
        sell_conditions: vec![Condition::Threshold {
            indicator: "PRICE".to_string(),
            op: Comparison::GreaterThan,
            value: 0.0,
        }],
    };
    let analysis = SignalEngine::analyze(&candles, "5m", &profile);
    let buys = analysis
        .signals
        .iter()
        .filter(|s| s.kind == SignalKind::Buy)
        .count();
    let sells = analysis
        .signals
        .iter()
        .filter(|s| s.kind == SignalKind::Sell)
        .count();
    assert_eq!(buys, 10);
    assert_eq!(sells, 10);
}

#[test]
fn crossovers_never_fire_on_the_first_row() {
    let closes: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).sin() * 3.0).collect();
    let candles = candles_from_closes(&closes);
    let set = IndicatorSet::compute(&candles);
    for (indicator, reference) in [
        ("MACD", "MACD_SIGNAL"),
        ("WAVETREND", "WAVETREND_SIGNAL"),
        ("EMA_12", "EMA_26"),
    ] {
        let up = Condition::CrossUp {
            indicator: indicator.to_string(),
            reference: reference.to_string(),
        };
        let down = Condition::CrossDown {
            indicator: indicator.to_string(),
            reference: reference.to_string(),
        };
        assert_ne!(evaluate_condition(&up, &set, 0), ConditionOutcome::Met);
        assert_ne!(evaluate_condition(&down, &set, 0), ConditionOutcome::Met);
    }
}
