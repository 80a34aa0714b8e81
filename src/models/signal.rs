//! Signal and analysis payload models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candle::Candle;
use crate::models::series::Series;

/// Direction of an emitted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
}

/// A timestamped BUY/SELL marker with its strength breakdown.
///
/// `strength` is exactly `conditions_met / total_conditions` and is only
/// ever in `[0.6, 1.0]` — weaker rows are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub time: DateTime<Utc>,
    pub kind: SignalKind,
    pub strength: f64,
    pub price: f64,
    pub conditions_met: usize,
    pub total_conditions: usize,
    pub reasons: Vec<String>,
}

/// Full analysis payload served to dashboard/bot renderers.
///
/// `indicators[name][i]` and `candlesticks[i]` are strictly positionally
/// aligned; a `BTreeMap` keeps serialization order deterministic so
/// repeated runs over the same window are bit-identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub candlesticks: Vec<Candle>,
    pub timeframe: String,
    pub indicators: BTreeMap<String, Series>,
    pub signals: Vec<Signal>,
}
