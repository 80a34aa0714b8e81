//! Stochastic oscillator.

use crate::common::math;
use crate::common::math::EPSILON;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// %K and %D series.
#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Series,
    pub d: Series,
}

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowest low) / (highest high - lowest low + eps)
/// over a full `k_period` window; %D = SMA(%K, d_period) with
/// `min_periods = 1`. Windows shorter than `k_period` stay undefined.
pub fn calculate_stochastic(candles: &[Candle], k_period: usize, d_period: usize) -> StochasticSeries {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let highest = math::rolling_max(&highs, k_period);
    let lowest = math::rolling_min(&lows, k_period);

    let k: Series = candles
        .iter()
        .enumerate()
        .map(|(i, c)| match (highest[i], lowest[i]) {
            (Some(hh), Some(ll)) => Some(100.0 * (c.close - ll) / (hh - ll + EPSILON)),
            _ => None,
        })
        .collect();
    let d = math::rolling_mean(&k, d_period, 1);

    StochasticSeries { k, d }
}
