//! Strategy configuration errors.
//!
//! These surface once, at profile load time; the per-row evaluator never
//! raises for data-shaped reasons.

#[derive(Debug)]
pub enum StrategyError {
    /// A condition shape that cannot be interpreted (missing both value
    /// and reference, both present, a crossover with a literal, ...).
    MalformedCondition(String),
    /// An operator outside the DSL grammar.
    UnknownOperator(String),
    /// Two profiles sharing one id.
    DuplicateProfile(String),
    /// A profile spec that failed structural deserialization.
    InvalidShape(String),
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyError::MalformedCondition(detail) => {
                write!(f, "malformed condition: {}", detail)
            }
            StrategyError::UnknownOperator(op) => write!(f, "unknown operator: {}", op),
            StrategyError::DuplicateProfile(id) => write!(f, "duplicate profile id: {}", id),
            StrategyError::InvalidShape(detail) => write!(f, "invalid profile shape: {}", detail),
        }
    }
}

impl std::error::Error for StrategyError {}
