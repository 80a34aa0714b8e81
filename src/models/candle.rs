//! OHLCV candle record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One interval's Open/High/Low/Close/Volume record.
///
/// Windows are ordered ascending by timestamp and owned by the caller that
/// fetched them; the engine only ever borrows a slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
