//! Compound tag condition evaluation.

use crate::parser::ast::Condition;
use crate::types::Value;

/// The result of evaluating a condition against a base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NotMatched,
    /// The base value was absent or null and the condition needs one.
    Missing,
}

impl Outcome {
    fn from_bool(matched: bool) -> Self {
        if matched {
            Outcome::Matched
        } else {
            Outcome::NotMatched
        }
    }
}

/// Evaluate `condition` against the base value of a compound tag.
///
/// `None` and `Some(Value::Null)` are the same missing value. Only `any`
/// accepts a missing value, and reports it as not matched.
///
/// ```
/// use parlance::parser::Condition;
/// use parlance::{Outcome, Value, evaluate};
///
/// assert_eq!(evaluate(Some(&Value::from(0)), &Condition::Any), Outcome::Matched);
/// assert_eq!(evaluate(None, &Condition::Any), Outcome::NotMatched);
/// assert_eq!(evaluate(None, &Condition::Positive), Outcome::Missing);
/// ```
pub fn evaluate(value: Option<&Value>, condition: &Condition) -> Outcome {
    let value = value.filter(|v| !v.is_null());
    let Some(value) = value else {
        return match condition {
            Condition::Any => Outcome::NotMatched,
            _ => Outcome::Missing,
        };
    };

    let matched = match condition {
        Condition::Any => true,
        Condition::Positive => value.parse_int().is_some_and(|n| n > 0),
        Condition::PositiveFloat => value.parse_float().is_some_and(|n| n > 0.0),
        Condition::NotEqual(rhs) => value.as_str() != Some(rhs.as_str()),
        Condition::Yes => value.as_bool() == Some(true),
        Condition::No => value.as_bool() == Some(false),
        Condition::Equals(literal) => value.to_string() == *literal,
    };
    Outcome::from_bool(matched)
}
