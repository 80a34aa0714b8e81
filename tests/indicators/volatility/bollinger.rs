//! Unit tests for Bollinger Bands

use chrono::{TimeZone, Utc};
use signatrix::indicators::volatility::calculate_bollinger;
use signatrix::models::candle::Candle;

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
                Utc.timestamp_opt(1_735_689_600 + i as i64 * 60, 0).unwrap(),
            )
        })
        .collect()
}

#[test]
fn bands_are_ordered_at_every_defined_row() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.5).sin() * 4.0).collect();
    let bands = calculate_bollinger(&candles_from_closes(&closes), 20, 2.0);
    for i in 0..closes.len() {
        let upper = bands.upper[i].unwrap();
        let middle = bands.middle[i].unwrap();
        let lower = bands.lower[i].unwrap();
        assert!(upper >= middle && middle >= lower, "bands inverted at {}", i);
    }
}

#[test]
fn one_row_window_has_zero_width() {
    let bands = calculate_bollinger(&candles_from_closes(&[100.0, 102.0]), 20, 2.0);
    assert_eq!(bands.upper[0], Some(100.0));
    assert_eq!(bands.middle[0], Some(100.0));
    assert_eq!(bands.lower[0], Some(100.0));
    // Row 1 spans two closes: mean 101, population std 1, width 2 * 2.
    assert_eq!(bands.middle[1], Some(101.0));
    assert_eq!(bands.upper[1], Some(103.0));
    assert_eq!(bands.lower[1], Some(99.0));
}
