//! MACD (Moving Average Convergence Divergence) indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// MACD line, signal line, and histogram series.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

/// Calculate MACD.
///
/// MACD = EMA(fast) - EMA(slow), signal = EMA(macd, signal_span),
/// histogram = MACD - signal. All EMAs are seeded with their first input,
/// so every series is defined from row 0.
pub fn calculate_macd(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal_span: usize,
) -> MacdSeries {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ema = math::ema(&closes, fast);
    let slow_ema = math::ema(&closes, slow);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = math::ema(&macd_line, signal_span);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    MacdSeries {
        macd: math::dense(&macd_line),
        signal: math::dense(&signal_line),
        histogram: math::dense(&histogram),
    }
}
