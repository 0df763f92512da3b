//! Control flow: `if`, `any`, `all` and `function`.
//!
//! None of these evaluate a block themselves until they decide to; the
//! branch `if` does not take and the tests after an `any` hit are never
//! invoked.

use std::sync::Arc;

use sprig_stack::ensure_sufficient_stack;

use super::{check_arity, function_arg, symbol_arg, type_error};
use crate::errors::{too_many_arguments, Arity, EvalError};
use crate::function::Function;
use crate::symbol::validate_symbol_name;
use crate::value::Value;
use crate::{Arguments, Binder, EvalResult};

/// `if(condition, then, [else])`.
///
/// Blocks run with the context, binder and arguments `if` itself received.
/// A `Null` third argument means there is no else block.
pub(super) fn if_<C>(ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("if", Arity::AtLeast(2), args)?;
    let then = function_arg("if", args, 1)?;
    let otherwise = match args.get(2) {
        None | Some(Value::Null) => None,
        Some(Value::Function(f)) => Some(f),
        Some(_) => return Err(type_error("if", args, 2, "a block")),
    };

    if args.value(0).is_truthy() {
        then.invoke(ctx, binder, args)
    } else if let Some(otherwise) = otherwise {
        otherwise.invoke(ctx, binder, args)
    } else {
        Ok(Value::Null)
    }
}

/// Evaluate one `any`/`all` test: a block is invoked, a symbol name is
/// looked up. Anything else, `Null` included, is not a test.
fn test_passes<C>(
    name: &str,
    ctx: &C,
    binder: &mut Binder<C>,
    args: &Arguments<C>,
    index: usize,
) -> Result<bool, EvalError> {
    match args.get(index) {
        Some(Value::Function(test)) => Ok(test.invoke(ctx, binder, args)?.is_truthy()),
        Some(Value::Str(symbol)) => Ok(binder.lookup(symbol)?.is_truthy()),
        _ => Err(type_error(name, args, index, "a block or symbol name")),
    }
}

/// `any(test, test, ...)`: the first argument whose test passes, or `Null`.
pub(super) fn any<C>(ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("any", Arity::AtLeast(2), args)?;
    for index in 0..args.len() {
        if test_passes("any", ctx, binder, args, index)? {
            return Ok(args.value(index));
        }
    }
    Ok(Value::Null)
}

/// `all(test, test, ...)`: `Null` at the first failing test, otherwise the
/// last argument as passed.
pub(super) fn all<C>(ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("all", Arity::AtLeast(2), args)?;
    for index in 0..args.len() {
        if !test_passes("all", ctx, binder, args, index)? {
            return Ok(Value::Null);
        }
    }
    Ok(args.last().cloned().unwrap_or_default())
}

/// `function(body, @param, ...)`: create a function.
///
/// Each invocation of the result runs `body` in one new frame holding the
/// parameters. Missing trailing arguments bind `Null`; surplus arguments
/// are an error.
pub(super) fn function<C: 'static>(
    _: &C,
    _: &mut Binder<C>,
    args: &Arguments<C>,
) -> EvalResult<C> {
    check_arity("function", Arity::AtLeast(1), args)?;
    let body = function_arg("function", args, 0)?.clone();
    let params = (1..args.len())
        .map(|index| {
            let param = symbol_arg("function", args, index)?;
            validate_symbol_name(param)?;
            Ok(param.to_string())
        })
        .collect::<Result<Arc<[String]>, EvalError>>()?;

    Ok(Value::Function(Function::new(
        move |ctx: &C, binder: &mut Binder<C>, call_args: &Arguments<C>| {
            invoke_user_function(&body, &params, ctx, binder, call_args)
        },
    )))
}

#[tracing::instrument(level = "trace", skip_all, fields(params = params.len()))]
fn invoke_user_function<C>(
    body: &Function<C>,
    params: &[String],
    ctx: &C,
    binder: &mut Binder<C>,
    args: &Arguments<C>,
) -> EvalResult<C> {
    if args.len() > params.len() {
        return Err(too_many_arguments(params.len(), args.len()));
    }
    let mut frame = binder.scoped();
    for (index, param) in params.iter().enumerate() {
        frame.bind_local(param, args.value(index));
    }
    tracing::trace!(depth = frame.depth(), "invoke");
    ensure_sufficient_stack(|| body.invoke(ctx, &mut frame, args))
}
