//! Arithmetic and relational keywords.

use super::{check_arity, collections};
use crate::errors::Arity;
use crate::function::Function;
use crate::operators::{Arithmetic, Relation};
use crate::value::Value;
use crate::{Arguments, Binder, EvalResult};

/// `add(a, b, ...)`: arithmetic sum, or list append when `a` is a list.
pub(super) fn add<C>(ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("add", Arity::AtLeast(2), args)?;
    if matches!(args.first(), Some(Value::List(_))) {
        return collections::append(ctx, binder, args);
    }
    Arithmetic::Add.fold(args)
}

/// The folding keyword for `op`.
pub(super) fn arithmetic<C: 'static>(op: Arithmetic) -> Function<C> {
    Function::new(move |_: &C, _: &mut Binder<C>, args: &Arguments<C>| {
        check_arity(op.name(), Arity::AtLeast(2), args)?;
        op.fold(args)
    })
}

/// `eq(a, b, ...)`: whether every argument equals the first.
pub(super) fn eq<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("eq", Arity::AtLeast(2), args)?;
    let first = &args.as_slice()[0];
    Ok(Value::from_truth(args.skip(1).all(|other| first.equals(other))))
}

/// The comparison keyword for `relation`. Returns the left operand when
/// the relation holds, so the result can be used as a value.
pub(super) fn relation<C: 'static>(relation: Relation) -> Function<C> {
    Function::new(move |_: &C, _: &mut Binder<C>, args: &Arguments<C>| {
        check_arity(relation.name(), Arity::Exactly(2), args)?;
        let (left, right) = (args.value(0), args.value(1));
        if relation.holds(&left, &right)? {
            Ok(left)
        } else {
            Ok(Value::Null)
        }
    })
}

/// `not(v)`: truth when `v` is `Null`.
pub(super) fn not<C>(_: &C, _: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
    check_arity("not", Arity::Exactly(1), args)?;
    Ok(Value::from_truth(args.value(0).is_null()))
}
