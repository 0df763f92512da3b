//! `var` and `set`.

use super::{check_arity, symbol_arg};
use crate::errors::Arity;
use crate::symbol::validate_symbol_name;
use crate::{Arguments, Binder, EvalResult};

/// `var(@name, [value])`: declare `name` in the current frame.
pub(super) fn var<C>(_: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("var", Arity::Between(1, 2), args)?;
    let name = symbol_arg("var", args, 0)?;
    validate_symbol_name(name)?;
    let value = args.value(1);
    binder.declare(name, value.clone())?;
    tracing::trace!(name, depth = binder.depth(), "declared");
    Ok(value)
}

/// `set(@name, [value])`: replace the innermost binding of `name`.
pub(super) fn set<C>(_: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("set", Arity::Between(1, 2), args)?;
    let name = symbol_arg("set", args, 0)?;
    let value = args.value(1);
    binder.mutate(name, value.clone())?;
    Ok(value)
}
