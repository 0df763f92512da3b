//! Sprig Compile - turns source text into callables.
//!
//! A parsed program is lowered into a tree of [`Function`]s, one per
//! expression. Literals and symbol references become constants, names become
//! binder lookups, blocks become function values, and calls look up their
//! target when they run. Nothing is resolved ahead of time, so a program can
//! call functions it declares later in the same run.
//!
//! [`Compiler`] is the [`SourceCompiler`] the `eval` keyword is registered
//! with. [`Runtime`] bundles the keyword catalog, `eval` and host bindings
//! into one static layer and compiles programs against it.

mod lower;
mod runtime;

pub use runtime::{Program, Runtime, RuntimeBuilder};

use sprig_eval::{compile_error, EvalError, Function, SourceCompiler};
use sprig_parse::parse;

/// Parse and lower `source` into a callable that evaluates the whole program
/// and yields its last value.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile<C: 'static>(source: &str) -> Result<Function<C>, EvalError> {
    let program = parse(source).map_err(|e| compile_error(e.to_string()))?;
    tracing::debug!(nodes = program.node_count(), "lowering program");
    Ok(lower::lower_sequence(&program.body))
}

/// [`compile`] as an injectable capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler;

impl<C: 'static> SourceCompiler<C> for Compiler {
    fn compile(&self, source: &str) -> Result<Function<C>, EvalError> {
        compile(source)
    }
}
