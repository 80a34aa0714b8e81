//! WaveTrend oscillator.

use crate::common::math;
use crate::common::math::EPSILON;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// wt1 (oscillator) and wt2 (its SMA(4) trigger line).
#[derive(Debug, Clone)]
pub struct WaveTrendSeries {
    pub wt1: Series,
    pub wt2: Series,
}

/// Calculate WaveTrend over hlc3 = (H+L+C)/3.
///
/// esa = EMA(hlc3, n1); d = EMA(|hlc3 - esa|, n1);
/// ci = (hlc3 - esa) / (0.015 * d + eps); wt1 = EMA(ci, n2);
/// wt2 = SMA(wt1, 4) with `min_periods = 1`.
pub fn calculate_wavetrend(candles: &[Candle], n1: usize, n2: usize) -> WaveTrendSeries {
    let hlc3: Vec<f64> = candles
        .iter()
        .map(|c| (c.high + c.low + c.close) / 3.0)
        .collect();
    let esa = math::ema(&hlc3, n1);
    let dev: Vec<f64> = hlc3
        .iter()
        .zip(esa.iter())
        .map(|(p, e)| (p - e).abs())
        .collect();
    let d = math::ema(&dev, n1);
    let ci: Vec<f64> = hlc3
        .iter()
        .enumerate()
        .map(|(i, p)| (p - esa[i]) / (0.015 * d[i] + EPSILON))
        .collect();
    let wt1 = math::ema(&ci, n2);
    let wt2 = math::rolling_mean(&math::dense(&wt1), 4, 1);

    WaveTrendSeries {
        wt1: math::dense(&wt1),
        wt2,
    }
}
