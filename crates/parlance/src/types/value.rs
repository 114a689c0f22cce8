use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A value stored in a [`DataMap`](crate::DataMap).
///
/// Values mirror the scalar shapes that content and session state produce:
/// strings (which may themselves be templates), integers, floats, booleans,
/// and an explicit null. An absent key and [`Value::Null`] are both treated
/// as missing data by the renderer.
///
/// # Example
///
/// ```
/// use parlance::Value;
///
/// let count: Value = 3.into();
/// let name: Value = "Ann".into();
/// let flag: Value = true.into();
///
/// assert_eq!(count.to_string(), "3");
/// assert_eq!(name.as_str(), Some("Ann"));
/// assert!(!flag.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean, matched by the `yes`/`no` conditions.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value, possibly containing tags.
    String(String),

    /// An explicit null. Treated the same as an absent key.
    Null,
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer interpretation with `parseInt` rules.
    ///
    /// Strings contribute their leading signed digit run (`"3 beds"` is 3),
    /// floats truncate toward zero, booleans and nulls do not parse.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Value::String(s) => leading_int(s),
            Value::Float(_) | Value::Bool(_) | Value::Null => None,
        }
    }

    /// Float interpretation with `parseFloat` rules.
    ///
    /// Strings contribute their longest numeric prefix; booleans and nulls
    /// do not parse.
    pub fn parse_float(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => leading_float(s),
            Value::Bool(_) | Value::Null => None,
        }
    }

    /// Numeric coercion used by loose equality against a number.
    ///
    /// Booleans become 0 or 1, the empty string becomes 0, other strings must
    /// be entirely numeric once trimmed.
    pub fn loose_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                if !trimmed
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
                {
                    return None;
                }
                trimmed.parse::<f64>().ok()
            }
            Value::Null => None,
        }
    }
}

/// Leading `[+-]?digits` of a string after leading whitespace.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = split_sign(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let n: i64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Longest prefix of a string that parses as a decimal float, exponent included.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in rest.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                if seen_digit {
                    end = i + 1;
                }
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let exponent = exponent_len(&rest[end..]);
    let n: f64 = if exponent == 0 {
        rest[..end].trim_end_matches('.').parse().ok()?
    } else {
        rest[..end + exponent].parse().ok()?
    };
    Some(if negative { -n } else { n })
}

/// Length of a leading `[eE][+-]?digits` exponent, or 0 if there is none.
fn exponent_len(s: &str) -> usize {
    let Some(after) = s.strip_prefix(['e', 'E']) else {
        return 0;
    };
    let unsigned = after.strip_prefix(['+', '-']).unwrap_or(after);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        0
    } else {
        s.len() - unsigned.len() + digits
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Null => write!(f, "null"),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn parse_int_takes_leading_digits() {
        assert_eq!(Value::from("3 beds").parse_int(), Some(3));
        assert_eq!(Value::from("  -12x").parse_int(), Some(-12));
        assert_eq!(Value::from("1.9").parse_int(), Some(1));
        assert_eq!(Value::from(1.9).parse_int(), Some(1));
        assert_eq!(Value::from("abc").parse_int(), None);
        assert_eq!(Value::from(true).parse_int(), None);
    }

    #[test]
    fn parse_float_takes_numeric_prefix() {
        assert_eq!(Value::from("0.25 acres").parse_float(), Some(0.25));
        assert_eq!(Value::from("-.5").parse_float(), Some(-0.5));
        assert_eq!(Value::from("7.").parse_float(), Some(7.0));
        assert_eq!(Value::from(".").parse_float(), None);
        assert_eq!(Value::Null.parse_float(), None);
    }

    #[test]
    fn parse_float_reads_exponent() {
        assert_eq!(Value::from("1e3").parse_float(), Some(1000.0));
        assert_eq!(Value::from("2.5E-1 acres").parse_float(), Some(0.25));
        assert_eq!(Value::from("-4.e+2").parse_float(), Some(-400.0));
        // an exponent marker without digits ends the number
        assert_eq!(Value::from("1e").parse_float(), Some(1.0));
        assert_eq!(Value::from("7e+x").parse_float(), Some(7.0));
    }

    #[test]
    fn loose_number_follows_loose_equality() {
        assert_eq!(Value::from(" 1.0 ").loose_number(), Some(1.0));
        assert_eq!(Value::from("").loose_number(), Some(0.0));
        assert_eq!(Value::from(true).loose_number(), Some(1.0));
        assert_eq!(Value::from("1 item").loose_number(), None);
        assert_eq!(Value::from("inf").loose_number(), None);
    }

    #[test]
    fn float_display_drops_trailing_zero() {
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }
}
