//! Strategy profile registry.
//!
//! A static, immutable id -> profile map, built once at startup. Every
//! condition shape passes through the validating parser here, so malformed
//! configuration fails fast at load time, never during evaluation.

use std::collections::BTreeMap;

use serde_json::json;

use crate::models::strategy::{ProfileSpec, StrategyProfile};
use crate::strategies::error::StrategyError;
use crate::strategies::parser::parse_profile;

/// Read-only registry of validated strategy profiles.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, StrategyProfile>,
}

impl ProfileRegistry {
    /// Build a registry from raw profile specs, validating eagerly.
    pub fn from_specs(specs: &[ProfileSpec]) -> Result<Self, StrategyError> {
        let mut profiles = BTreeMap::new();
        for spec in specs {
            let profile = parse_profile(spec)?;
            if profiles.contains_key(&profile.id) {
                return Err(StrategyError::DuplicateProfile(profile.id));
            }
            profiles.insert(profile.id.clone(), profile);
        }
        Ok(Self { profiles })
    }

    /// The built-in strategy set shipped with the engine.
    pub fn builtin() -> Result<Self, StrategyError> {
        let specs: Vec<ProfileSpec> = serde_json::from_value(builtin_profiles())
            .map_err(|e| StrategyError::InvalidShape(e.to_string()))?;
        Self::from_specs(&specs)
    }

    pub fn get(&self, id: &str) -> Option<&StrategyProfile> {
        self.profiles.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|k| k.as_str())
    }

    pub fn profiles(&self) -> impl Iterator<Item = &StrategyProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn builtin_profiles() -> serde_json::Value {
    json!([
        {
            "id": "trend_follow",
            "indicators": ["EMA_12", "EMA_26", "ADX", "MACD", "MACD_SIGNAL", "ATR"],
            "buy": [
                { "indicator": "EMA_12", "op": ">", "reference": "EMA_26" },
                { "indicator": "ADX", "op": ">", "value": 25 },
                { "indicator": "MACD", "op": ">", "reference": "MACD_SIGNAL" }
            ],
            "sell": [
                { "indicator": "EMA_12", "op": "<", "reference": "EMA_26" },
                { "indicator": "ADX", "op": ">", "value": 25 },
                { "indicator": "MACD", "op": "<", "reference": "MACD_SIGNAL" }
            ]
        },
        {
            "id": "rsi_reversal",
            "indicators": ["RSI", "SMA_20"],
            "buy": [
                { "indicator": "RSI", "op": "<", "value": 30 },
                { "indicator": "PRICE", "op": ">", "reference": "SMA_20" }
            ],
            "sell": [
                { "indicator": "RSI", "op": ">", "value": 70 },
                { "indicator": "PRICE", "op": "<", "reference": "SMA_20" }
            ]
        },
        {
            "id": "bollinger_fade",
            "indicators": ["BB_UPPER", "BB_MIDDLE", "BB_LOWER", "RSI"],
            "buy": [
                { "indicator": "PRICE", "op": "<", "reference": "BB_LOWER" },
                { "indicator": "RSI", "op": "<", "value": 35 }
            ],
            "sell": [
                { "indicator": "PRICE", "op": ">", "reference": "BB_UPPER" },
                { "indicator": "RSI", "op": ">", "value": 65 }
            ]
        },
        {
            "id": "macd_momentum",
            "indicators": ["MACD", "MACD_SIGNAL", "MACD_HIST", "STOCH_K", "STOCH_D", "CCI"],
            "buy": [
                { "indicator": "MACD", "op": "cross_up", "reference": "MACD_SIGNAL" },
                { "indicator": "STOCH_K", "op": "<", "value": 80 },
                { "indicator": "CCI", "op": ">", "value": -100 }
            ],
            "sell": [
                { "indicator": "MACD", "op": "cross_down", "reference": "MACD_SIGNAL" },
                { "indicator": "STOCH_K", "op": ">", "value": 20 },
                { "indicator": "CCI", "op": "<", "value": 100 }
            ]
        },
        {
            "id": "wavetrend_ml",
            "indicators": [
                "WAVETREND", "WAVETREND_SIGNAL", "ML_PREDICTION", "ML_SIGNAL", "MTF_TREND"
            ],
            "buy": [
                { "indicator": "WAVETREND", "op": "cross_up", "reference": "WAVETREND_SIGNAL" },
                { "indicator": "ML_SIGNAL", "op": "==", "value": 1 },
                { "indicator": "MTF_TREND", "op": ">", "value": -1 }
            ],
            "sell": [
                { "indicator": "WAVETREND", "op": "cross_down", "reference": "WAVETREND_SIGNAL" },
                { "indicator": "ML_SIGNAL", "op": "==", "value": -1 },
                { "indicator": "MTF_TREND", "op": "<", "value": 1 }
            ]
        }
    ])
}
