//! Strategy profiles: load-time parsing/validation and per-row evaluation.

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod registry;

pub use error::StrategyError;
pub use evaluator::{evaluate_conditions, ConditionOutcome, RowEvaluation};
pub use registry::ProfileRegistry;
