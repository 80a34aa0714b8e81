//! SMA (Simple Moving Average) indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Rolling mean of closes with `min_periods = 1`: early rows hold partial
/// averages rather than undefined markers.
pub fn calculate_sma(candles: &[Candle], period: usize) -> Series {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::rolling_mean(&math::dense(&closes), period, 1)
}
