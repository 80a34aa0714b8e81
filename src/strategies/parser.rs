//! Condition and profile parsing.
//!
//! Raw config shapes are interpreted exactly once, here. Which of
//! `value`/`reference` is present decides the condition kind; anything
//! ambiguous or incomplete is rejected immediately so the evaluator never
//! meets a malformed condition.

use crate::models::strategy::{
    Comparison, Condition, ConditionSpec, ProfileSpec, StrategyProfile,
};
use crate::strategies::error::StrategyError;

/// Parse one raw condition into the validated tagged union.
pub fn parse_condition(spec: &ConditionSpec) -> Result<Condition, StrategyError> {
    match spec.op.as_str() {
        "<" | ">" | "==" => parse_comparison(spec),
        "cross_up" | "cross_down" => parse_crossover(spec),
        other => Err(StrategyError::UnknownOperator(other.to_string())),
    }
}

/// Parse a whole profile spec, validating every condition.
pub fn parse_profile(spec: &ProfileSpec) -> Result<StrategyProfile, StrategyError> {
    let parse_list = |specs: &[ConditionSpec]| -> Result<Vec<Condition>, StrategyError> {
        specs
            .iter()
            .map(|c| {
                parse_condition(c).map_err(|e| annotate(e, &spec.id))
            })
            .collect()
    };
    Ok(StrategyProfile {
        id: spec.id.clone(),
        indicators: spec.indicators.clone(),
        buy_conditions: parse_list(&spec.buy)?,
        sell_conditions: parse_list(&spec.sell)?,
    })
}

fn parse_comparison(spec: &ConditionSpec) -> Result<Condition, StrategyError> {
    let op = match spec.op.as_str() {
        "<" => Comparison::LessThan,
        ">" => Comparison::GreaterThan,
        _ => Comparison::Equal,
    };
    match (spec.value, spec.reference.as_ref()) {
        (Some(value), None) => Ok(Condition::Threshold {
            indicator: spec.indicator.clone(),
            op,
            value,
        }),
        (None, Some(reference)) => {
            if op == Comparison::Equal {
                return Err(StrategyError::MalformedCondition(format!(
                    "{}: reference comparisons support only < and >",
                    spec.indicator
                )));
            }
            Ok(Condition::Reference {
                indicator: spec.indicator.clone(),
                op,
                reference: reference.clone(),
            })
        }
        (Some(_), Some(_)) => Err(StrategyError::MalformedCondition(format!(
            "{}: both value and reference present",
            spec.indicator
        ))),
        (None, None) => Err(StrategyError::MalformedCondition(format!(
            "{}: needs a value or a reference",
            spec.indicator
        ))),
    }
}

fn parse_crossover(spec: &ConditionSpec) -> Result<Condition, StrategyError> {
    if spec.value.is_some() {
        return Err(StrategyError::MalformedCondition(format!(
            "{}: crossovers compare against a reference, not a literal",
            spec.indicator
        )));
    }
    let reference = spec.reference.clone().ok_or_else(|| {
        StrategyError::MalformedCondition(format!("{}: crossover needs a reference", spec.indicator))
    })?;
    let indicator = spec.indicator.clone();
    Ok(if spec.op == "cross_up" {
        Condition::CrossUp {
            indicator,
            reference,
        }
    } else {
        Condition::CrossDown {
            indicator,
            reference,
        }
    })
}

fn annotate(err: StrategyError, profile_id: &str) -> StrategyError {
    match err {
        StrategyError::MalformedCondition(detail) => {
            StrategyError::MalformedCondition(format!("{}: {}", profile_id, detail))
        }
        StrategyError::UnknownOperator(op) => {
            StrategyError::UnknownOperator(format!("{}: {}", profile_id, op))
        }
        other => other,
    }
}
