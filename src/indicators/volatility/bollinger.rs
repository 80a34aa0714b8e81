//! Bollinger Bands indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Upper/middle/lower band series.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// Calculate Bollinger Bands.
///
/// Middle = SMA(period), upper/lower = middle ± std_dev * rolling
/// population std. Both rolling windows use `min_periods = 1`, so the
/// bands are defined from row 0 (a one-row window has zero deviation).
pub fn calculate_bollinger(candles: &[Candle], period: usize, std_dev: f64) -> BollingerSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let closes = math::dense(&closes);
    let middle = math::rolling_mean(&closes, period, 1);
    let std = math::rolling_std(&closes, period, 1);

    let band = |sign: f64| -> Series {
        middle
            .iter()
            .zip(std.iter())
            .map(|(m, s)| match (m, s) {
                (Some(m), Some(s)) => Some(m + sign * std_dev * s),
                _ => None,
            })
            .collect()
    };

    BollingerSeries {
        upper: band(1.0),
        middle: middle.clone(),
        lower: band(-1.0),
    }
}
