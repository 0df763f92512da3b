//! Sprig Eval - values, scopes and keywords of the Sprig language.
//!
//! Sprig programs are trees of callables. A compiled program, a keyword and
//! a user-defined function all have the same shape,
//! `(context, binder, arguments) -> value`, and are invoked the same way.
//! This crate owns that shape and everything the callables operate on:
//!
//! - [`Value`]: the dynamic value type. `Null` doubles as "false".
//! - [`Function`]: the shared callable.
//! - [`Arguments`]: the argument sequence of one invocation.
//! - [`Binder`]: the static keyword layer plus a stack of dynamic frames.
//! - [`keywords`]: `var`, `set`, arithmetic, comparisons, `if`, `any`,
//!   `all`, `function`, list and string primitives, and `eval`.
//!
//! Tokenizing and parsing live elsewhere; `eval` reaches them only through
//! the [`SourceCompiler`] it is registered with.
//!
//! The context type `C` is chosen by the host and passed untouched to every
//! callable. Host functions are bound next to the keywords with
//! [`StaticScope::bind`].

mod arguments;
mod binder;
mod compiler;
mod convert;
pub mod errors;
mod function;
pub mod keywords;
pub mod operators;
mod symbol;
mod value;

pub use arguments::Arguments;
pub use binder::{Binder, FrameGuard, StaticScope};
pub use compiler::SourceCompiler;
pub use convert::FromValue;
pub use errors::{
    // Invocation shape
    not_callable, too_many_arguments, wrong_arg_count, wrong_arg_type,
    // Symbols
    duplicate_symbol, invalid_symbol_name, undefined_symbol,
    // Collections, arithmetic and conversions
    compile_error, conversion_failed, division_by_zero, index_out_of_range, integer_overflow,
    invalid_operands, invalid_range, modulo_by_zero, number_format,
    // Types
    Arity, EvalError, EvalErrorKind, EvalResult,
};
pub use function::{Function, NativeFn};
pub use symbol::{is_valid_symbol_name, validate_symbol_name};
pub use value::{ListRef, Value};

#[cfg(test)]
mod tests;
