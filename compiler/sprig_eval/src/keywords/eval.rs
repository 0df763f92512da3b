//! `eval(source)`.

use std::sync::Arc;

use sprig_stack::ensure_sufficient_stack;

use super::{check_arity, type_error};
use crate::compiler::SourceCompiler;
use crate::errors::{Arity, EvalError};
use crate::function::Function;
use crate::value::Value;
use crate::{Arguments, Binder};

/// The `eval` keyword, compiling through `compiler`.
///
/// The nested program shares the caller's context and static layer, but
/// runs on a fresh binder: it neither sees nor changes the caller's
/// variables. Its failures, compile errors included, keep their kind and
/// gain an `eval: ` prefix.
pub fn eval_keyword<C: 'static>(compiler: Arc<dyn SourceCompiler<C>>) -> Function<C> {
    Function::new(move |ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>| {
        check_arity("eval", Arity::Exactly(1), args)?;
        let Some(Value::Str(source)) = args.get(0) else {
            return Err(type_error("eval", args, 0, "a string"));
        };
        let _span = tracing::debug_span!("eval", len = source.len()).entered();

        let program = compiler.compile(source).map_err(EvalError::in_eval)?;
        let mut nested = binder.fresh();
        ensure_sufficient_stack(|| program.invoke(ctx, &mut nested, &Arguments::new()))
            .map_err(EvalError::in_eval)
    })
}
