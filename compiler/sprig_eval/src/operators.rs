//! Binary operators behind the arithmetic and relational keywords.
//!
//! The operand types form a small closed set, so each operator is a plain
//! match over the operand pair rather than any kind of runtime overload
//! resolution:
//!
//! - `Int` with `Int` uses checked integer arithmetic; division or modulo by
//!   zero and overflow are errors.
//! - `Int` mixed with `Float` promotes to `Float`, which follows IEEE 754.
//! - `add` concatenates when either operand is a string and the left one is
//!   a number or string; the other operand contributes its display form,
//!   with `Null` contributing nothing.
//! - Every other pair fails.

use std::cmp::Ordering;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_operands, modulo_by_zero, EvalError, EvalResult,
};
use crate::value::Value;

/// Arithmetic folded by `add`, `subtract`, `multiply`, `divide` and `modulo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Arithmetic {
    /// Verb used in error messages, which is also the keyword name.
    pub fn name(self) -> &'static str {
        match self {
            Arithmetic::Add => "add",
            Arithmetic::Subtract => "subtract",
            Arithmetic::Multiply => "multiply",
            Arithmetic::Divide => "divide",
            Arithmetic::Modulo => "modulo",
        }
    }

    /// Apply the operator to one operand pair.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply<C>(self, left: &Value<C>, right: &Value<C>) -> EvalResult<C> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => self.ints(*a, *b),
            (Value::Float(a), Value::Float(b)) => self.floats(*a, *b),
            (Value::Int(a), Value::Float(b)) => self.floats(*a as f64, *b),
            (Value::Float(a), Value::Int(b)) => self.floats(*a, *b as f64),
            (Value::Int(_) | Value::Float(_) | Value::Str(_), Value::Str(_))
            | (Value::Str(_), _)
                if self == Arithmetic::Add =>
            {
                Ok(concat(left, right))
            }
            _ => Err(invalid_operands(
                self.name(),
                left.type_name(),
                right.type_name(),
            )),
        }
    }

    /// Fold the operator left to right over `operands`.
    ///
    /// The first operand is the accumulator; an empty sequence yields `Null`.
    pub fn fold<'a, C: 'a, I>(self, operands: I) -> EvalResult<C>
    where
        I: IntoIterator<Item = &'a Value<C>>,
    {
        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            return Ok(Value::Null);
        };
        operands.try_fold(first.clone(), |acc, next| self.apply(&acc, next))
    }

    fn ints<C>(self, a: i64, b: i64) -> EvalResult<C> {
        let result = match self {
            Arithmetic::Add => a.checked_add(b),
            Arithmetic::Subtract => a.checked_sub(b),
            Arithmetic::Multiply => a.checked_mul(b),
            Arithmetic::Divide => {
                if b == 0 {
                    return Err(division_by_zero());
                }
                a.checked_div(b)
            }
            Arithmetic::Modulo => {
                if b == 0 {
                    return Err(modulo_by_zero());
                }
                a.checked_rem(b)
            }
        };
        result.map(Value::Int).ok_or_else(|| integer_overflow(self.name()))
    }

    fn floats<C>(self, a: f64, b: f64) -> EvalResult<C> {
        Ok(Value::Float(match self {
            Arithmetic::Add => a + b,
            Arithmetic::Subtract => a - b,
            Arithmetic::Multiply => a * b,
            Arithmetic::Divide => a / b,
            Arithmetic::Modulo => a % b,
        }))
    }
}

fn concat<C>(left: &Value<C>, right: &Value<C>) -> Value<C> {
    fn push<C>(out: &mut String, value: &Value<C>) {
        match value {
            Value::Null => {}
            Value::Str(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
    }
    let mut out = String::new();
    push(&mut out, left);
    push(&mut out, right);
    Value::from(out)
}

/// Ordering tests behind `mt`, `lt`, `mte` and `lte`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    More,
    Less,
    MoreOrEqual,
    LessOrEqual,
}

impl Relation {
    pub fn name(self) -> &'static str {
        match self {
            Relation::More => "mt",
            Relation::Less => "lt",
            Relation::MoreOrEqual => "mte",
            Relation::LessOrEqual => "lte",
        }
    }

    /// Whether `left` stands in this relation to `right`.
    ///
    /// Unordered floats (NaN) satisfy no relation.
    pub fn holds<C>(self, left: &Value<C>, right: &Value<C>) -> Result<bool, EvalError> {
        let ordering = compare(self.name(), left, right)?;
        Ok(match (self, ordering) {
            (_, None) => false,
            (Relation::More, Some(o)) => o == Ordering::Greater,
            (Relation::Less, Some(o)) => o == Ordering::Less,
            (Relation::MoreOrEqual, Some(o)) => o != Ordering::Less,
            (Relation::LessOrEqual, Some(o)) => o != Ordering::Greater,
        })
    }
}

/// Order two values: numbers numerically, strings lexicographically.
///
/// `operation` names the keyword in the error for any other pair.
#[allow(clippy::cast_precision_loss)]
pub fn compare<C>(
    operation: &'static str,
    left: &Value<C>,
    right: &Value<C>,
) -> Result<Option<Ordering>, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Float(a), Value::Float(b)) => Ok(a.partial_cmp(b)),
        (Value::Int(a), Value::Float(b)) => Ok((*a as f64).partial_cmp(b)),
        (Value::Float(a), Value::Int(b)) => Ok(a.partial_cmp(&(*b as f64))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        _ => Err(invalid_operands(operation, left.type_name(), right.type_name())),
    }
}
