//! Synthetic ML-style indicators and the multi-timeframe trend flag.
//!
//! These are derived from other computed series rather than raw candles,
//! so they take series inputs and stay aligned with them.

use crate::common::math;
use crate::common::math::EPSILON;
use crate::models::series::Series;

/// Min-max normalization of `(RSI + MACD * 100) / 2` over the whole
/// window. Undefined wherever RSI is.
pub fn calculate_ml_prediction(rsi: &Series, macd: &Series) -> Series {
    let combined: Series = rsi
        .iter()
        .zip(macd.iter())
        .map(|(r, m)| match (r, m) {
            (Some(r), Some(m)) => Some((r + m * 100.0) / 2.0),
            _ => None,
        })
        .collect();
    math::min_max_normalize(&combined)
}

/// Discrete vote over the prediction: +1 above 0.6, -1 below 0.4, else 0.
pub fn calculate_ml_signal(prediction: &Series) -> Series {
    prediction
        .iter()
        .map(|p| {
            p.map(|p| {
                if p > 0.6 {
                    1.0
                } else if p < 0.4 {
                    -1.0
                } else {
                    0.0
                }
            })
        })
        .collect()
}

/// Higher-timeframe trend flag from the fast/slow EMA spread.
///
/// +1 when (fast - slow) / (slow + eps) clears +0.02, -1 below -0.02,
/// else 0.
pub fn calculate_mtf_trend(ema_fast: &Series, ema_slow: &Series) -> Series {
    ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => {
                let spread = (f - s) / (s + EPSILON);
                Some(if spread > 0.02 {
                    1.0
                } else if spread < -0.02 {
                    -1.0
                } else {
                    0.0
                })
            }
            _ => None,
        })
        .collect()
}
