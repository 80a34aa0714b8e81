//! Strategy configuration data models.
//!
//! Conditions exist in two forms: the loosely typed [`ConditionSpec`] shape
//! that strategy files/dicts are written in, and the validated [`Condition`]
//! tagged union the evaluator runs against. The parse happens exactly once,
//! at profile load time (see `strategies::parser`).

use serde::{Deserialize, Serialize};

/// Comparison operators usable in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Comparison {
    LessThan,
    GreaterThan,
    Equal,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Comparison::LessThan => write!(f, "<"),
            Comparison::GreaterThan => write!(f, ">"),
            Comparison::Equal => write!(f, "=="),
        }
    }
}

/// One validated comparison in a strategy's buy or sell list.
///
/// The indicator name `"PRICE"` resolves to the close-price series rather
/// than a computed indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Indicator compared against a literal.
    Threshold {
        indicator: String,
        op: Comparison,
        value: f64,
    },
    /// Indicator compared against another indicator, `<` or `>` only.
    Reference {
        indicator: String,
        op: Comparison,
        reference: String,
    },
    /// Indicator crosses above the reference between rows `i-1` and `i`.
    CrossUp { indicator: String, reference: String },
    /// Indicator crosses below the reference between rows `i-1` and `i`.
    CrossDown { indicator: String, reference: String },
}

impl Condition {
    /// Human-readable form used in signal reasons:
    /// `"<indicator> <operator> <value-or-reference>"`.
    pub fn describe(&self) -> String {
        match self {
            Condition::Threshold {
                indicator,
                op,
                value,
            } => format!("{} {} {}", indicator, op, value),
            Condition::Reference {
                indicator,
                op,
                reference,
            } => format!("{} {} {}", indicator, op, reference),
            Condition::CrossUp {
                indicator,
                reference,
            } => format!("{} cross_up {}", indicator, reference),
            Condition::CrossDown {
                indicator,
                reference,
            } => format!("{} cross_down {}", indicator, reference),
        }
    }
}

/// A strategy: id, plotted indicator subset, and its condition lists.
///
/// Pure configuration — no behavior lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfile {
    pub id: String,
    pub indicators: Vec<String>,
    pub buy_conditions: Vec<Condition>,
    pub sell_conditions: Vec<Condition>,
}

/// Raw condition shape as written in strategy config.
///
/// Which of `value`/`reference` is present decides the condition kind;
/// ambiguous or incomplete shapes are rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSpec {
    pub indicator: String,
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Raw strategy profile shape as written in strategy config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub id: String,
    #[serde(default)]
    pub indicators: Vec<String>,
    pub buy: Vec<ConditionSpec>,
    pub sell: Vec<ConditionSpec>,
}
