//! CCI (Commodity Channel Index) indicator.

use crate::common::math;
use crate::common::math::EPSILON;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Calculate CCI over the typical price (H+L+C)/3.
///
/// cci = (tp - SMA(tp, period)) / (0.015 * MAD(tp, period) + eps), with
/// both rolling windows at `min_periods = 1`, so the series is defined
/// from row 0 (a one-row window yields 0).
pub fn calculate_cci(candles: &[Candle], period: usize) -> Series {
    let typical: Vec<f64> = candles
        .iter()
        .map(|c| (c.high + c.low + c.close) / 3.0)
        .collect();
    let typical_series = math::dense(&typical);
    let sma = math::rolling_mean(&typical_series, period, 1);
    let mad = math::rolling_mad(&typical_series, period, 1);

    typical
        .iter()
        .enumerate()
        .map(|(i, tp)| match (sma[i], mad[i]) {
            (Some(sma), Some(mad)) => Some((tp - sma) / (0.015 * mad + EPSILON)),
            _ => None,
        })
        .collect()
}
