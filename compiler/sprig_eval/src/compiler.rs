//! Compilation as an injected capability.
//!
//! The evaluator never tokenizes or parses anything itself. The `eval`
//! keyword is handed a [`SourceCompiler`] when it is registered and asks it
//! for a callable whenever a program evaluates a string.

use std::sync::Arc;

use crate::errors::EvalError;
use crate::function::Function;

/// Turns source text into the callable that evaluates it.
pub trait SourceCompiler<C>: Send + Sync {
    /// Compile `source` into a callable that runs the whole program when
    /// invoked. Tokenizer and parser failures are `Compile` errors.
    fn compile(&self, source: &str) -> Result<Function<C>, EvalError>;
}

impl<C, T: SourceCompiler<C> + ?Sized> SourceCompiler<C> for Arc<T> {
    fn compile(&self, source: &str) -> Result<Function<C>, EvalError> {
        (**self).compile(source)
    }
}
