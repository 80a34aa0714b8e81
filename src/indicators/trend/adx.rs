//! ADX (Average Directional Index) indicator, simplified variant.
//!
//! This is deliberately NOT the canonical Wilder ADX: directional deltas
//! are raw (no Wilder smoothing or seeding) and all smoothing is a plain
//! rolling mean. Strategy thresholds such as `ADX > 25` were tuned against
//! this numeric range, so the simplification must stay as-is.

use crate::common::math;
use crate::common::math::EPSILON;
use crate::indicators::volatility::atr::true_range_series;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// ADX output: trend strength plus both directional index lines.
#[derive(Debug, Clone)]
pub struct AdxSeries {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

/// Calculate the simplified ADX.
///
/// `+DM = max(high[i] - high[i-1], 0)`, `-DM = max(low[i-1] - low[i], 0)`,
/// `DI = 100 * SMA(dm, period) / (SMA(tr, period) + eps)`,
/// `dx = 100 * |+DI - -DI| / (+DI + -DI + eps)`, `ADX = SMA(dx, period)`.
pub fn calculate_adx(candles: &[Candle], period: usize) -> AdxSeries {
    let n = candles.len();
    let tr = math::dense(&true_range_series(candles));

    let mut plus_dm: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut minus_dm: Vec<Option<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        if i == 0 {
            plus_dm.push(None);
            minus_dm.push(None);
            continue;
        }
        plus_dm.push(Some((candles[i].high - candles[i - 1].high).max(0.0)));
        minus_dm.push(Some((candles[i - 1].low - candles[i].low).max(0.0)));
    }

    let smoothed_tr = math::rolling_mean(&tr, period, 1);
    let smoothed_plus = math::rolling_mean(&plus_dm, period, 1);
    let smoothed_minus = math::rolling_mean(&minus_dm, period, 1);

    let mut plus_di: Series = Vec::with_capacity(n);
    let mut minus_di: Series = Vec::with_capacity(n);
    let mut dx: Series = Vec::with_capacity(n);
    for i in 0..n {
        match (smoothed_plus[i], smoothed_minus[i], smoothed_tr[i]) {
            (Some(p), Some(m), Some(t)) => {
                let pdi = 100.0 * p / (t + EPSILON);
                let mdi = 100.0 * m / (t + EPSILON);
                plus_di.push(Some(pdi));
                minus_di.push(Some(mdi));
                dx.push(Some(100.0 * (pdi - mdi).abs() / (pdi + mdi + EPSILON)));
            }
            _ => {
                plus_di.push(None);
                minus_di.push(None);
                dx.push(None);
            }
        }
    }

    AdxSeries {
        adx: math::rolling_mean(&dx, period, 1),
        plus_di,
        minus_di,
    }
}
