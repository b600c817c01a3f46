//! Condition evaluator

use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition};
use crate::error::{FinLifeError, Result};
use crate::stats::{PlayerState, Stat};

/// Evaluate an AST against a PlayerState
pub fn check(ast: &AstNode, state: &PlayerState) -> bool {
    match ast {
        AstNode::Single(cond) => check_single(cond, state),
        AstNode::And(left, right) => check(left, state) && check(right, state),
        AstNode::Or(left, right) => check(left, state) || check(right, state),
    }
}

/// Reject conditions naming a property that `PlayerState::get` does not know
pub fn check_properties(ast: &AstNode) -> Result<()> {
    match ast {
        AstNode::Single(cond) if !is_known_property(&cond.property) => Err(
            FinLifeError::InvalidCondition(format!("Unknown property: {}", cond.property)),
        ),
        AstNode::Single(_) => Ok(()),
        AstNode::And(left, right) | AstNode::Or(left, right) => {
            check_properties(left)?;
            check_properties(right)
        }
    }
}

/// Whether `prop` names a readable property
pub fn is_known_property(prop: &str) -> bool {
    if matches!(prop, "AGE" | "SUM" | "CNT" | "OPT") || Stat::from_code(prop).is_some() {
        return true;
    }
    prop.strip_prefix(['L', 'H'])
        .and_then(Stat::from_code)
        .is_some()
}

fn check_single(cond: &SingleCondition, state: &PlayerState) -> bool {
    let prop_value = state.get(&cond.property);

    match (&prop_value, &cond.value, cond.operator) {
        // Integer comparisons
        (PropertyValue::Integer(pv), ConditionValue::Integer(cv), op) => compare(*pv, *cv, op),

        // Float comparisons
        (PropertyValue::Integer(pv), ConditionValue::Float(cv), Operator::Greater) => {
            (*pv as f64) > *cv
        }
        (PropertyValue::Integer(pv), ConditionValue::Float(cv), Operator::Less) => {
            (*pv as f64) < *cv
        }
        (PropertyValue::Integer(pv), ConditionValue::Float(cv), Operator::GreaterEqual) => {
            (*pv as f64) >= *cv
        }
        (PropertyValue::Integer(pv), ConditionValue::Float(cv), Operator::LessEqual) => {
            (*pv as f64) <= *cv
        }

        // Integer in list of literals
        (PropertyValue::Integer(pv), ConditionValue::Array(arr), Operator::IncludesAny) => {
            arr.iter().any(|v| v.parse::<i64>() == Ok(*pv))
        }
        (PropertyValue::Integer(pv), ConditionValue::Array(arr), Operator::ExcludesAll) => {
            arr.iter().all(|v| v.parse::<i64>() != Ok(*pv))
        }

        // List contains value (=) / does not contain value (!=)
        (PropertyValue::List(list), ConditionValue::String(cv), Operator::Equal) => {
            list.iter().any(|v| v == cv)
        }
        (PropertyValue::List(list), ConditionValue::String(cv), Operator::NotEqual) => {
            list.iter().all(|v| v != cv)
        }

        // Includes any (?) / excludes all (!)
        (PropertyValue::List(list), ConditionValue::Array(arr), Operator::IncludesAny) => {
            list.iter().any(|v| arr.contains(v))
        }
        (PropertyValue::List(list), ConditionValue::Array(arr), Operator::ExcludesAll) => {
            list.iter().all(|v| !arr.contains(v))
        }

        // Default: false for unsupported combinations
        _ => false,
    }
}

#[inline]
fn compare(pv: i64, cv: i64, op: Operator) -> bool {
    match op {
        Operator::Greater => pv > cv,
        Operator::Less => pv < cv,
        Operator::GreaterEqual => pv >= cv,
        Operator::LessEqual => pv <= cv,
        Operator::Equal => pv == cv,
        Operator::NotEqual => pv != cv,
        Operator::IncludesAny | Operator::ExcludesAll => false,
    }
}

/// Property value types for evaluation
#[derive(Debug, Clone)]
pub enum PropertyValue<'a> {
    Integer(i64),
    List(&'a [String]),
}

impl PlayerState {
    /// Get a property value for condition evaluation.
    ///
    /// `AGE`, `MNY`, `HAP`, `HLT`, `FIQ` read current values, an `L`/`H` prefix
    /// reads the lowest/highest value seen, `SUM` is the summary score, `CNT`
    /// the number of decisions made and `OPT` the list of chosen option ids.
    /// Unknown names read as zero; `check_properties` rejects them up front.
    pub fn get(&self, prop: &str) -> PropertyValue<'_> {
        match prop {
            "AGE" => return PropertyValue::Integer(self.age() as i64),
            "SUM" => return PropertyValue::Integer(self.summary_score()),
            "CNT" => return PropertyValue::Integer(self.choices().len() as i64),
            "OPT" => return PropertyValue::List(self.choices()),
            _ => {}
        }

        if let Some(stat) = Stat::from_code(prop) {
            return PropertyValue::Integer(self.stat(stat));
        }

        let extreme = prop
            .strip_prefix('L')
            .and_then(Stat::from_code)
            .map(|stat| self.extremes(stat).low)
            .or_else(|| {
                prop.strip_prefix('H')
                    .and_then(Stat::from_code)
                    .map(|stat| self.extremes(stat).high)
            });

        PropertyValue::Integer(extreme.unwrap_or(0))
    }
}
