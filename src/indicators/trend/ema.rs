//! EMA (Exponential Moving Average) indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Exponential moving average of closes over `span`.
///
/// Seeded with the first close, so the series is defined from row 0.
pub fn calculate_ema(candles: &[Candle], span: usize) -> Series {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::dense(&math::ema(&closes, span))
}
