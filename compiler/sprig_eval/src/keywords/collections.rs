//! List keywords: `list`, `count`, `get`, `add` on lists, `slice` and
//! `each`.

use super::{check_arity, count_value, function_arg, list_arg, symbol_arg};
use crate::errors::{duplicate_symbol, index_out_of_range, invalid_range, Arity};
use crate::value::Value;
use crate::{Arguments, Binder, EvalResult};

/// `list(v, ...)`: a new list of all arguments.
pub(super) fn list<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    Ok(Value::list(args.iter().cloned().collect()))
}

/// `count(list)`.
pub(super) fn count<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("count", Arity::Exactly(1), args)?;
    Ok(count_value(list_arg("count", args, 0)?.len()))
}

/// `get(list, index)`.
pub(super) fn get<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("get", Arity::Exactly(2), args)?;
    let list = list_arg("get", args, 0)?;
    let index = args.get_as::<usize>(1)?;
    list.get(index)
        .ok_or_else(|| index_out_of_range(index, list.len()))
}

/// `add(list, v, ...)`: append in place, returning the last appended item.
/// Reached through `add` when its first argument is a list.
pub(super) fn append<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("add", Arity::AtLeast(2), args)?;
    let list = list_arg("add", args, 0)?;
    Ok(list.extend(args.skip(1).cloned()).unwrap_or_default())
}

/// `slice(list, [start], [end])`: a new list of `[start, end)`.
pub(super) fn slice<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("slice", Arity::Between(1, 3), args)?;
    let list = list_arg("slice", args, 0)?;
    let len = list.len();
    let start = if args.len() > 1 {
        args.get_as::<usize>(1)?
    } else {
        0
    };
    let end = if args.len() > 2 {
        args.get_as::<usize>(2)?
    } else {
        len
    };
    if end <= start {
        return Err(invalid_range(start, end));
    }
    list.range(start, end)
        .map(Value::list)
        .ok_or_else(|| index_out_of_range(end, len))
}

/// `each(@name, list, body)`: invoke `body` once per item with `name`
/// bound to the item in the current frame. Returns the list.
///
/// The loop walks a snapshot, so the body may append to the list. `name`
/// must not be declared already and is unbound again when the loop ends,
/// whether or not the body failed.
pub(super) fn each<C>(ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("each", Arity::Exactly(3), args)?;
    let name = symbol_arg("each", args, 0)?;
    let list = list_arg("each", args, 1)?;
    let body = function_arg("each", args, 2)?;
    if binder.is_declared(name) {
        return Err(duplicate_symbol(name));
    }

    let items = list.snapshot();
    tracing::trace!(name, items = items.len(), "each");
    let result = items.into_iter().try_for_each(|item| {
        binder.bind_local(name, item);
        body.invoke(ctx, binder, args).map(drop)
    });
    binder.remove_from_current_frame(name);
    result.map(|()| Value::List(list.clone()))
}
