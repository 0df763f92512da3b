//! Conversions and string keywords. Positions and lengths count
//! characters, not bytes.

use super::{check_arity, count_value, type_error};
use crate::errors::{index_out_of_range, number_format, Arity, EvalError};
use crate::value::Value;
use crate::{Arguments, Binder, EvalResult};

/// `string(v)`: display form of `v`. `Null` stays `Null`.
pub(super) fn string<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("string", Arity::Exactly(1), args)?;
    Ok(match args.value(0) {
        Value::Null => Value::Null,
        s @ Value::Str(_) => s,
        other => Value::from(other.to_string()),
    })
}

/// `number(v)`: numbers pass through; strings parse as a float when they
/// contain a `.` and as an integer otherwise.
pub(super) fn number<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("number", Arity::Exactly(1), args)?;
    match args.value(0) {
        n @ (Value::Int(_) | Value::Float(_)) => Ok(n),
        Value::Str(s) => parse_number(&s),
        _ => Err(type_error("number", args, 0, "a number or string")),
    }
}

fn parse_number<C>(text: &str) -> EvalResult<C> {
    let trimmed = text.trim();
    let parsed = if trimmed.contains('.') {
        trimmed.parse().ok().map(Value::Float)
    } else {
        trimmed.parse().ok().map(Value::Int)
    };
    parsed.ok_or_else(|| number_format(text))
}

/// `substr(s, start, [len])`.
pub(super) fn substr<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("substr", Arity::Between(2, 3), args)?;
    let text = args.get_as::<String>(0)?;
    let start = args.get_as::<usize>(1)?;
    let available = text.chars().count();
    if start > available {
        return Err(index_out_of_range(start, available));
    }
    let len = if args.len() > 2 {
        let len = args.get_as::<usize>(2)?;
        let end = start.saturating_add(len);
        if end > available {
            return Err(index_out_of_range(end, available));
        }
        len
    } else {
        available - start
    };
    Ok(Value::from(text.chars().skip(start).take(len).collect::<String>()))
}

/// `length(s)`.
pub(super) fn length<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("length", Arity::Exactly(1), args)?;
    Ok(count_value(args.get_as::<String>(0)?.chars().count()))
}

/// `replace(s, old, new)`: every occurrence of `old` replaced.
pub(super) fn replace<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("replace", Arity::Exactly(3), args)?;
    let text = args.get_as::<String>(0)?;
    let old = args.get_as::<String>(1)?;
    let new = args.get_as::<String>(2)?;
    if old.is_empty() {
        return Err(EvalError::new("'replace' cannot replace an empty string"));
    }
    Ok(Value::from(text.replace(&old, &new)))
}
