//! Analysis engine façade.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::indicators::registry::IndicatorSet;
use crate::models::candle::Candle;
use crate::models::signal::Analysis;
use crate::models::strategy::StrategyProfile;
use crate::signals::aggregation::aggregate_signals;

pub struct SignalEngine;

impl SignalEngine {
    /// Run the full pipeline for one window and one profile.
    ///
    /// Recomputes every indicator from scratch, evaluates the profile's
    /// condition lists at every row, and assembles the renderer payload.
    /// The exposed indicator map is the profile's subset (unknown names in
    /// the subset are ignored); evaluation always sees the full set.
    pub fn analyze(candles: &[Candle], timeframe: &str, profile: &StrategyProfile) -> Analysis {
        debug!(
            rows = candles.len(),
            timeframe = %timeframe,
            "computing indicator set"
        );
        let set = IndicatorSet::compute(candles);
        let signals = aggregate_signals(profile, &set, candles);
        info!(
            profile = %profile.id,
            rows = candles.len(),
            signals = signals.len(),
            "analysis complete"
        );

        let indicators: BTreeMap<String, _> = profile
            .indicators
            .iter()
            .filter_map(|name| set.get(name).map(|s| (name.clone(), s.clone())))
            .collect();

        Analysis {
            candlesticks: candles.to_vec(),
            timeframe: timeframe.to_string(),
            indicators,
            signals,
        }
    }
}
