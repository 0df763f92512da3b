//! The keyword catalog.
//!
//! Every keyword is an ordinary [`Function`] bound by name in the static
//! layer of the binder, so programs invoke keywords and their own functions
//! through the same path. Keywords that take a block (`if`, `any`, `all`,
//! `function`, `each`) receive it as an unevaluated function value and
//! decide themselves whether and when to invoke it.
//!
//! [`register`] binds everything except `eval`, which needs a
//! [`SourceCompiler`] and is bound by [`register_eval`].

mod collections;
mod control;
mod declarations;
mod eval;
mod math;
mod text;

use std::sync::Arc;

use crate::binder::StaticScope;
use crate::compiler::SourceCompiler;
use crate::errors::{wrong_arg_count, wrong_arg_type, Arity, EvalError};
use crate::function::Function;
use crate::operators::{Arithmetic, Relation};
use crate::value::{ListRef, Value};
use crate::{Arguments, Binder, EvalResult};

pub use eval::eval_keyword;

/// Names bound by [`register`] and [`register_eval`].
pub const KEYWORDS: &[&str] = &[
    "var", "set", "add", "subtract", "multiply", "divide", "modulo", "eq", "mt", "lt", "mte",
    "lte", "not", "if", "any", "all", "function", "list", "count", "get", "slice", "each",
    "string", "number", "substr", "length", "replace", "eval",
];

type Keyword<C> = fn(&C, &mut Binder<C>, &Arguments<C>) -> EvalResult<C>;

fn bind<C: 'static>(scope: &mut StaticScope<C>, name: &str, keyword: Keyword<C>) {
    scope.bind(name, Function::new(keyword));
}

/// Bind every keyword except `eval` into `scope`.
pub fn register<C: 'static>(scope: &mut StaticScope<C>) {
    bind(scope, "var", declarations::var);
    bind(scope, "set", declarations::set);

    bind(scope, "add", math::add);
    for op in [
        Arithmetic::Subtract,
        Arithmetic::Multiply,
        Arithmetic::Divide,
        Arithmetic::Modulo,
    ] {
        scope.bind(op.name(), math::arithmetic(op));
    }
    bind(scope, "eq", math::eq);
    for relation in [
        Relation::More,
        Relation::Less,
        Relation::MoreOrEqual,
        Relation::LessOrEqual,
    ] {
        scope.bind(relation.name(), math::relation(relation));
    }
    bind(scope, "not", math::not);

    bind(scope, "if", control::if_);
    bind(scope, "any", control::any);
    bind(scope, "all", control::all);
    bind(scope, "function", control::function);

    bind(scope, "list", collections::list);
    bind(scope, "count", collections::count);
    bind(scope, "get", collections::get);
    bind(scope, "slice", collections::slice);
    bind(scope, "each", collections::each);

    bind(scope, "string", text::string);
    bind(scope, "number", text::number);
    bind(scope, "substr", text::substr);
    bind(scope, "length", text::length);
    bind(scope, "replace", text::replace);
}

/// Bind `eval`, compiling through `compiler`.
pub fn register_eval<C: 'static>(scope: &mut StaticScope<C>, compiler: Arc<dyn SourceCompiler<C>>) {
    scope.bind("eval", eval_keyword(compiler));
}

impl<C: 'static> StaticScope<C> {
    /// A scope holding every keyword except `eval`.
    pub fn standard() -> Self {
        let mut scope = StaticScope::new();
        register(&mut scope);
        scope
    }

    /// A scope holding every keyword, with `eval` compiling through
    /// `compiler`.
    pub fn with_compiler(compiler: Arc<dyn SourceCompiler<C>>) -> Self {
        let mut scope = Self::standard();
        register_eval(&mut scope, compiler);
        scope
    }
}

// Argument checks shared by the keyword modules. Positions in messages are
// 1-based.

fn check_arity<C>(name: &str, arity: Arity, args: &Arguments<C>) -> Result<(), EvalError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(wrong_arg_count(name, arity, args.len()))
    }
}

#[cold]
fn type_error<C>(name: &str, args: &Arguments<C>, index: usize, expected: &'static str) -> EvalError {
    let got = args.get(index).map_or("null", Value::type_name);
    wrong_arg_type(name, index + 1, expected, got)
}

fn list_arg<'a, C>(name: &str, args: &'a Arguments<C>, index: usize) -> Result<&'a ListRef<C>, EvalError> {
    args.get(index)
        .and_then(Value::as_list)
        .ok_or_else(|| type_error(name, args, index, "a list"))
}

fn function_arg<'a, C>(
    name: &str,
    args: &'a Arguments<C>,
    index: usize,
) -> Result<&'a Function<C>, EvalError> {
    args.get(index)
        .and_then(Value::as_function)
        .ok_or_else(|| type_error(name, args, index, "a block"))
}

/// A symbol name, as passed with `@name`.
fn symbol_arg<'a, C>(name: &str, args: &'a Arguments<C>, index: usize) -> Result<&'a str, EvalError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| type_error(name, args, index, "a symbol name"))
}

/// Lengths and indices as integer values.
fn count_value<C>(n: usize) -> Value<C> {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}
