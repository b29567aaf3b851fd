//! Numeric coercion applied by the `int` and `float` modifiers.
//!
//! Strings are read by their leading numeric prefix, so `"12abc"` becomes
//! `12` and `"abc"` becomes `0`.  Only scalars are coerced.

use std::fmt;

use crate::value::Value;

/// A numeric coercion requested by a spec entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cast {
    /// Coerce to [`Value::Int`].
    Int,
    /// Coerce to [`Value::Float`].
    Float,
}

impl Cast {
    /// Matches a modifier token, ignoring ASCII case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("int") {
            Some(Self::Int)
        } else if token.eq_ignore_ascii_case("float") {
            Some(Self::Float)
        } else {
            None
        }
    }

    /// Applies the coercion to a scalar; other values pass through.
    ///
    /// # Example
    ///
    /// ```
    /// use contour_core::{Cast, Value};
    ///
    /// assert_eq!(Cast::Int.apply(Value::from("30")), Value::Int(30));
    /// assert_eq!(Cast::Float.apply(Value::from("2.5kg")), Value::Float(2.5));
    /// assert_eq!(Cast::Int.apply(Value::Null), Value::Null);
    /// ```
    #[must_use]
    pub fn apply(self, value: Value) -> Value {
        if !value.is_scalar() {
            return value;
        }
        match self {
            Self::Int => Value::Int(to_int(&value)),
            Self::Float => Value::Float(to_float(&value)),
        }
    }
}

impl fmt::Display for Cast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
        }
    }
}

fn to_int(value: &Value) -> i64 {
    match value {
        Value::Bool(flag) => i64::from(*flag),
        Value::Int(number) => *number,
        Value::Float(number) => truncate(*number),
        Value::String(text) => {
            let prefix = numeric_prefix(text);
            prefix
                .parse::<i64>()
                .unwrap_or_else(|_| truncate(prefix.parse::<f64>().unwrap_or_default()))
        }
        _ => 0,
    }
}

fn to_float(value: &Value) -> f64 {
    match value {
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Int(number) => widen(*number),
        Value::Float(number) => *number,
        Value::String(text) => numeric_prefix(text).parse::<f64>().unwrap_or_default(),
        _ => 0.0,
    }
}

/// Truncates towards zero; non-finite input yields zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to integer truncation is the documented cast"
)]
fn truncate(number: f64) -> i64 {
    if number.is_finite() {
        number.trunc() as i64
    } else {
        0
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integers beyond 2^53 round to the nearest float like any numeric cast"
)]
const fn widen(number: i64) -> f64 {
    number as f64
}

/// Returns the longest leading slice of `text` that reads as a number.
///
/// Leading whitespace is skipped.  The prefix accepts an optional sign,
/// digits with an optional fraction, and an optional exponent.
pub(crate) fn numeric_prefix(text: &str) -> &str {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = count_digits(bytes, end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(bytes, end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let digits = count_digits(bytes, exponent_end);
        if digits > 0 {
            end = exponent_end + digits;
        }
    }

    trimmed.get(..end).unwrap_or_default()
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|byte| byte.is_ascii_digit()).count())
}
