//! RSI (Relative Strength Index) indicator.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Calculate RSI over close-to-close deltas.
///
/// RSI = 100 - (100 / (1 + RS)), RS = avg gain / avg loss, where both
/// averages are full-window rolling means of the per-step gain/loss split.
/// The first row has no prior delta, so RSI is defined from row `period`.
/// `avg_loss == 0` pins RSI at exactly 100 (the RS -> infinity convention).
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Series {
    let n = candles.len();
    let mut gains: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut losses: Vec<Option<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        if i == 0 {
            gains.push(None);
            losses.push(None);
            continue;
        }
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains.push(Some(change));
            losses.push(Some(0.0));
        } else {
            gains.push(Some(0.0));
            losses.push(Some(-change));
        }
    }

    let avg_gain = math::rolling_mean(&gains, period, period);
    let avg_loss = math::rolling_mean(&losses, period, period);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(gain, loss)| match (gain, loss) {
            (Some(gain), Some(loss)) => {
                if *loss == 0.0 {
                    Some(100.0)
                } else {
                    let rs = gain / loss;
                    Some(100.0 - 100.0 / (1.0 + rs))
                }
            }
            _ => None,
        })
        .collect()
}
