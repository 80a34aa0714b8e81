//! Market data provider interface for data source integration.

use chrono::DateTime;

use crate::models::candle::Candle;

/// Source of validated, ascending-ordered OHLCV windows.
pub trait MarketDataProvider {
    /// Get up to `limit` historical candles for a pair and timeframe.
    fn get_candles(
        &self,
        pair: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>>;
}

/// Deterministic synthetic provider: a trending sine wave around a base
/// price. Backs the demo binary and scenario tests; repeated calls with
/// the same arguments return identical windows.
pub struct SyntheticMarketData {
    base_price: f64,
}

impl SyntheticMarketData {
    pub fn new(base_price: f64) -> Self {
        Self { base_price }
    }
}

impl MarketDataProvider for SyntheticMarketData {
    fn get_candles(
        &self,
        _pair: &str,
        timeframe: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        let step = timeframe_seconds(timeframe);
        let base_ts: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z
        let amplitude = self.base_price * 0.01;

        let mut candles = Vec::with_capacity(limit);
        let mut prev_close = self.base_price;
        for i in 0..limit {
            let trend = i as f64 * self.base_price * 0.0002;
            let wave = (i as f64 * 0.25).sin() * amplitude;
            let close = self.base_price + trend + wave;
            let open = prev_close;
            let high = open.max(close) + amplitude * 0.2;
            let low = open.min(close) - amplitude * 0.2;
            let timestamp = DateTime::from_timestamp(base_ts + i as i64 * step, 0)
                .ok_or("timestamp out of range")?;
            candles.push(Candle::new(
                open,
                high,
                low,
                close,
                1_000.0 + i as f64,
                timestamp,
            ));
            prev_close = close;
        }
        Ok(candles)
    }
}

fn timeframe_seconds(timeframe: &str) -> i64 {
    let (digits, unit) = timeframe.split_at(timeframe.len().saturating_sub(1));
    let n: i64 = digits.parse().unwrap_or(5);
    match unit {
        "m" => n * 60,
        "h" => n * 3_600,
        "d" => n * 86_400,
        _ => 300,
    }
}
