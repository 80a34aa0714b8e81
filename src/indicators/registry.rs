//! Indicator registry: the full fixed set computed once per window.

use std::collections::BTreeMap;

use crate::indicators::momentum::{
    calculate_cci, calculate_macd, calculate_rsi, calculate_stochastic, calculate_wavetrend,
};
use crate::indicators::synthetic::{
    calculate_ml_prediction, calculate_ml_signal, calculate_mtf_trend,
};
use crate::indicators::trend::{calculate_adx, calculate_ema, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger};
use crate::models::candle::Candle;
use crate::models::series::Series;

/// Pseudo-indicator name resolving to the close-price series.
pub const PRICE: &str = "PRICE";

/// Every computed indicator series for one candle window, keyed by name.
///
/// All series are index-aligned with the window; the close series is kept
/// for `"PRICE"` resolution. Recomputed from scratch per window — nothing
/// is carried between calls.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    series: BTreeMap<String, Series>,
    closes: Vec<f64>,
}

impl IndicatorSet {
    /// Compute the full fixed indicator set for a candle window.
    pub fn compute(candles: &[Candle]) -> Self {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let mut series: BTreeMap<String, Series> = BTreeMap::new();
        let mut put = |name: &str, s: Series| {
            series.insert(name.to_string(), s);
        };

        put("SMA_20", calculate_sma(candles, 20));
        put("SMA_50", calculate_sma(candles, 50));
        put("EMA_12", calculate_ema(candles, 12));
        put("EMA_26", calculate_ema(candles, 26));
        put("EMA_200", calculate_ema(candles, 200));

        put("RSI", calculate_rsi(candles, 14));

        let macd = calculate_macd(candles, 12, 26, 9);
        put("MACD", macd.macd);
        put("MACD_SIGNAL", macd.signal);
        put("MACD_HIST", macd.histogram);

        let bb = calculate_bollinger(candles, 20, 2.0);
        put("BB_UPPER", bb.upper);
        put("BB_MIDDLE", bb.middle);
        put("BB_LOWER", bb.lower);

        let stoch = calculate_stochastic(candles, 14, 3);
        put("STOCH_K", stoch.k);
        put("STOCH_D", stoch.d);

        put("ATR", calculate_atr(candles, 14));

        let adx = calculate_adx(candles, 14);
        put("ADX", adx.adx);
        put("PLUS_DI", adx.plus_di);
        put("MINUS_DI", adx.minus_di);

        put("CCI", calculate_cci(candles, 20));

        let wt = calculate_wavetrend(candles, 10, 21);
        put("WAVETREND", wt.wt1);
        put("WAVETREND_SIGNAL", wt.wt2);

        let ml_prediction = calculate_ml_prediction(&series["RSI"], &series["MACD"]);
        let ml_signal = calculate_ml_signal(&ml_prediction);
        let mtf_trend = calculate_mtf_trend(&series["EMA_12"], &series["EMA_200"]);
        series.insert("ML_PREDICTION".to_string(), ml_prediction);
        series.insert("ML_SIGNAL".to_string(), ml_signal);
        series.insert("MTF_TREND".to_string(), mtf_trend);

        Self { series, closes }
    }

    /// Assemble a set from precomputed parts. Series are expected to be
    /// aligned with `closes`; useful for callers plugging in their own
    /// indicator pipelines.
    pub fn from_parts(series: BTreeMap<String, Series>, closes: Vec<f64>) -> Self {
        Self { series, closes }
    }

    /// Look up a computed series by name. `"PRICE"` is not a computed
    /// series; use [`IndicatorSet::value_at`] for condition resolution.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Resolve one value for condition evaluation: `"PRICE"` maps to the
    /// close series, anything else to the computed set. `None` when the
    /// row is out of range or the value is undefined.
    pub fn value_at(&self, name: &str, i: usize) -> Option<f64> {
        if name == PRICE {
            return self.closes.get(i).copied();
        }
        self.series.get(name)?.get(i).copied().flatten()
    }

    /// Whether `name` resolves at all (computed series or `"PRICE"`).
    pub fn contains(&self, name: &str) -> bool {
        name == PRICE || self.series.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|k| k.as_str())
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Length of the underlying candle window.
    pub fn window_len(&self) -> usize {
        self.closes.len()
    }
}
