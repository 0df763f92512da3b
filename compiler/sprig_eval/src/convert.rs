//! Coercion of argument values into Rust types.

use crate::value::Value;

/// A Rust type an argument can be interpreted as.
///
/// Conversions are lenient in the direction programs expect: numeric
/// strings are parsed, and floats with no fractional part are accepted
/// where an integer is wanted. Numbers convert to strings, but lists and
/// booleans do not. `Null` never converts.
pub trait FromValue<C>: Sized {
    /// Description of the target type used in error messages.
    const EXPECTED: &'static str;

    fn from_value(value: &Value<C>) -> Option<Self>;
}

impl<C> FromValue<C> for i64 {
    const EXPECTED: &'static str = "an integer";

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
    fn from_value(value: &Value<C>) -> Option<Self> {
        // 2^63 is exactly representable; `i64::MAX as f64` rounds up to it.
        const UPPER: f64 = i64::MAX as f64;
        const LOWER: f64 = i64::MIN as f64;
        match value {
            Value::Int(n) => Some(*n),
            Value::Float(f) if f.fract() == 0.0 && (LOWER..UPPER).contains(f) => Some(*f as i64),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl<C> FromValue<C> for usize {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_value(value: &Value<C>) -> Option<Self> {
        i64::from_value(value).and_then(|n| usize::try_from(n).ok())
    }
}

impl<C> FromValue<C> for f64 {
    const EXPECTED: &'static str = "a number";

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value<C>) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl<C> FromValue<C> for String {
    const EXPECTED: &'static str = "a string";

    fn from_value(value: &Value<C>) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.to_string()),
            Value::Int(_) | Value::Float(_) => Some(value.to_string()),
            _ => None,
        }
    }
}
