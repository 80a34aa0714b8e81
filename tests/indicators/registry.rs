//! Unit tests for the indicator registry

use chrono::{TimeZone, Utc};
use signatrix::indicators::registry::IndicatorSet;
use signatrix::models::candle::Candle;

const ALL_NAMES: &[&str] = &[
    "SMA_20",
    "SMA_50",
    "EMA_12",
    "EMA_26",
    "EMA_200",
    "RSI",
    "MACD",
    "MACD_SIGNAL",
    "MACD_HIST",
    "BB_UPPER",
    "BB_MIDDLE",
    "BB_LOWER",
    "STOCH_K",
    "STOCH_D",
    "ATR",
    "ADX",
    "PLUS_DI",
    "MINUS_DI",
    "CCI",
    "WAVETREND",
    "WAVETREND_SIGNAL",
    "ML_PREDICTION",
    "ML_SIGNAL",
    "MTF_TREND",
];

fn create_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let price = 100.0 + (i as f64 * 0.5) + ((i as f64) * 0.3).sin();
            Candle::new(
                price,
                price + 0.4,
                price - 0.4,
                price + 0.1,
                1000.0 + i as f64,
                Utc.timestamp_opt(1_735_689_600 + i as i64 * 300, 0).unwrap(),
            )
        })
        .collect()
}

#[test]
fn computes_the_full_fixed_set() {
    let set = IndicatorSet::compute(&create_candles(60));
    for name in ALL_NAMES {
        assert!(set.get(name).is_some(), "missing series {}", name);
    }
    assert_eq!(set.names().count(), ALL_NAMES.len());
}

#[test]
fn every_series_matches_the_window_length() {
    for count in [0, 1, 5, 40, 120] {
        let set = IndicatorSet::compute(&create_candles(count));
        assert_eq!(set.window_len(), count);
        for name in ALL_NAMES {
            assert_eq!(
                set.get(name).map(|s| s.len()),
                Some(count),
                "series {} misaligned at window length {}",
                name,
                count
            );
        }
    }
}

#[test]
fn price_resolves_to_the_close_series() {
    let candles = create_candles(10);
    let set = IndicatorSet::compute(&candles);
    assert_eq!(set.value_at("PRICE", 3), Some(candles[3].close));
    assert_eq!(set.value_at("PRICE", 10), None);
    assert!(set.contains("PRICE"));
    assert!(!set.contains("NOT_AN_INDICATOR"));
}

#[test]
fn short_windows_degrade_instead_of_failing() {
    let set = IndicatorSet::compute(&create_candles(5));
    // Seeded/partial-window indicators are defined from row 0.
    for name in ["SMA_20", "EMA_200", "MACD", "BB_MIDDLE", "ATR", "CCI", "WAVETREND"] {
        assert!(set.value_at(name, 0).is_some(), "{} undefined at row 0", name);
    }
    // Lookback-bound indicators stay undefined across the whole window.
    for name in ["RSI", "STOCH_K", "ML_PREDICTION"] {
        let series = set.get(name).unwrap();
        assert!(series.iter().all(|v| v.is_none()), "{} defined too early", name);
    }
}

#[test]
fn ml_signal_votes_are_discrete() {
    let set = IndicatorSet::compute(&create_candles(120));
    let ml = set.get("ML_SIGNAL").unwrap();
    assert!(ml
        .iter()
        .flatten()
        .all(|v| *v == 1.0 || *v == 0.0 || *v == -1.0));
    let mtf = set.get("MTF_TREND").unwrap();
    assert!(mtf
        .iter()
        .flatten()
        .all(|v| *v == 1.0 || *v == 0.0 || *v == -1.0));
}
