//! Signal aggregation and the analysis engine façade.

pub mod aggregation;
pub mod engine;

pub use aggregation::{aggregate_signals, SIGNAL_STRENGTH_THRESHOLD};
pub use engine::SignalEngine;
