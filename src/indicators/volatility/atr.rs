//! ATR (Average True Range) indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Per-row true range. The first row has no previous close and degrades to
/// `high - low`.
pub fn true_range_series(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.high - c.low
            } else {
                math::true_range(c.high, c.low, candles[i - 1].close)
            }
        })
        .collect()
}

/// Rolling mean of true range with `min_periods = 1`.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Series {
    math::rolling_mean(&math::dense(&true_range_series(candles)), period, 1)
}
