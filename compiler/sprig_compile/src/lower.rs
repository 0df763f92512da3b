//! Lowering from syntax tree to callables.
//!
//! Every node is invoked with the context, binder and arguments its parent
//! was invoked with. Blocks hand their body over as a function value
//! instead of running it.

use std::sync::Arc;

use sprig_eval::{not_callable, Arguments, Function, Value};
use sprig_parse::{Expr, SpannedExpr};
use sprig_stack::ensure_sufficient_stack;
use tracing::trace;

/// A callable running `body` in order and yielding the last value, or null
/// for an empty body.
pub(crate) fn lower_sequence<C: 'static>(body: &[SpannedExpr]) -> Function<C> {
    let nodes: Arc<[Function<C>]> = body.iter().map(lower_expr).collect();
    Function::new(move |ctx, binder, args| {
        let mut last = Value::Null;
        for node in nodes.iter() {
            last = node.invoke(ctx, binder, args)?;
        }
        Ok(last)
    })
}

fn lower_expr<C: 'static>(expr: &SpannedExpr) -> Function<C> {
    ensure_sufficient_stack(|| match &expr.expr {
        Expr::Int(n) => constant(Value::Int(*n)),
        Expr::Float(f) => constant(Value::Float(*f)),
        Expr::Str(s) | Expr::Symbol(s) => constant(Value::string(s)),
        Expr::Lookup(name) => {
            let name: Arc<str> = Arc::from(name.as_str());
            Function::new(move |_, binder, _| binder.lookup(&name))
        }
        Expr::Call {
            target,
            args,
            deferred,
        } => {
            let call = lower_call(target, args);
            if *deferred {
                constant(Value::Function(call))
            } else {
                call
            }
        }
        Expr::Block(body) => constant(Value::Function(lower_sequence(body))),
    })
}

fn constant<C: 'static>(value: Value<C>) -> Function<C> {
    Function::new(move |_, _, _| Ok(value.clone()))
}

/// The target is looked up when the call runs, before its arguments are
/// evaluated left to right.
fn lower_call<C: 'static>(target: &str, args: &[SpannedExpr]) -> Function<C> {
    let target: Arc<str> = Arc::from(target);
    let nodes: Arc<[Function<C>]> = args.iter().map(lower_expr).collect();
    Function::new(move |ctx, binder, outer| {
        ensure_sufficient_stack(|| {
            trace!(callee = &*target, "call");
            let function = match binder.lookup(&target)? {
                Value::Function(function) => function,
                other => return Err(not_callable(&target, other.type_name())),
            };
            let mut values = Arguments::new();
            for node in nodes.iter() {
                values.push(node.invoke(ctx, binder, outer)?);
            }
            function.invoke(ctx, binder, &values)
        })
    })
}
