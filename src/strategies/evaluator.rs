//! Per-row condition evaluation.
//!
//! Each condition resolves to a tri-state outcome. `Unknown` is reserved
//! for names that do not resolve to any computed series (or `"PRICE"`):
//! those conditions are skipped and count toward neither `met` nor
//! `total`. A resolvable indicator whose value is still undefined at the
//! row compares as `NotMet`, matching how the comparisons behave over
//! not-yet-warm data in the source dashboards.

use crate::indicators::registry::IndicatorSet;
use crate::models::strategy::{Comparison, Condition};

/// Tri-state result of one condition at one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOutcome {
    Met,
    NotMet,
    /// The condition names an indicator absent from the computed set;
    /// it is excluded from the row's totals.
    Unknown,
}

/// Aggregated outcome of one condition list at one row.
#[derive(Debug, Clone, Default)]
pub struct RowEvaluation {
    pub met: usize,
    pub total: usize,
    pub reasons: Vec<String>,
}

/// Evaluate a condition list at row `i`, collecting a formatted reason for
/// every condition that held.
pub fn evaluate_conditions(
    conditions: &[Condition],
    set: &IndicatorSet,
    i: usize,
) -> RowEvaluation {
    let mut row = RowEvaluation::default();
    for condition in conditions {
        match evaluate_condition(condition, set, i) {
            ConditionOutcome::Met => {
                row.met += 1;
                row.total += 1;
                row.reasons.push(condition.describe());
            }
            ConditionOutcome::NotMet => row.total += 1,
            ConditionOutcome::Unknown => {}
        }
    }
    row
}

/// Evaluate a single condition at row `i`.
pub fn evaluate_condition(
    condition: &Condition,
    set: &IndicatorSet,
    i: usize,
) -> ConditionOutcome {
    match condition {
        Condition::Threshold {
            indicator,
            op,
            value,
        } => {
            if !set.contains(indicator) {
                return ConditionOutcome::Unknown;
            }
            match set.value_at(indicator, i) {
                Some(actual) => outcome(compare(actual, *op, *value)),
                None => ConditionOutcome::NotMet,
            }
        }
        Condition::Reference {
            indicator,
            op,
            reference,
        } => {
            if !set.contains(indicator) || !set.contains(reference) {
                return ConditionOutcome::Unknown;
            }
            match (set.value_at(indicator, i), set.value_at(reference, i)) {
                (Some(a), Some(b)) => outcome(compare(a, *op, b)),
                _ => ConditionOutcome::NotMet,
            }
        }
        Condition::CrossUp {
            indicator,
            reference,
        } => crossover(set, indicator, reference, i, |a, b, pa, pb| {
            a > b && pa <= pb
        }),
        Condition::CrossDown {
            indicator,
            reference,
        } => crossover(set, indicator, reference, i, |a, b, pa, pb| {
            a < b && pa >= pb
        }),
    }
}

fn crossover(
    set: &IndicatorSet,
    indicator: &str,
    reference: &str,
    i: usize,
    crossed: impl Fn(f64, f64, f64, f64) -> bool,
) -> ConditionOutcome {
    if !set.contains(indicator) || !set.contains(reference) {
        return ConditionOutcome::Unknown;
    }
    // No prior row to cross from.
    if i == 0 {
        return ConditionOutcome::NotMet;
    }
    let values = (
        set.value_at(indicator, i),
        set.value_at(reference, i),
        set.value_at(indicator, i - 1),
        set.value_at(reference, i - 1),
    );
    match values {
        (Some(a), Some(b), Some(pa), Some(pb)) => outcome(crossed(a, b, pa, pb)),
        _ => ConditionOutcome::NotMet,
    }
}

fn compare(a: f64, op: Comparison, b: f64) -> bool {
    match op {
        Comparison::LessThan => a < b,
        Comparison::GreaterThan => a > b,
        Comparison::Equal => (a - b).abs() < f64::EPSILON,
    }
}

fn outcome(met: bool) -> ConditionOutcome {
    if met {
        ConditionOutcome::Met
    } else {
        ConditionOutcome::NotMet
    }
}
