//! The embedding entry point: a static layer plus the compiler.

use std::fmt;
use std::sync::Arc;

use sprig_eval::{Arguments, Binder, EvalError, EvalResult, Function, StaticScope, Value};

use crate::Compiler;

/// Builder for [`Runtime`].
///
/// Starts from every keyword, `eval` included. Host bindings are added on
/// top and replace a keyword of the same name.
pub struct RuntimeBuilder<C> {
    scope: StaticScope<C>,
}

impl<C: 'static> RuntimeBuilder<C> {
    pub fn new() -> Self {
        RuntimeBuilder {
            scope: StaticScope::with_compiler(Arc::new(Compiler)),
        }
    }

    /// Bind a host function.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, function: Function<C>) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, "binding host function");
        self.scope.bind(name, function);
        self
    }

    /// Bind a constant visible to every program.
    #[must_use]
    pub fn bind_value(mut self, name: impl Into<String>, value: impl Into<Value<C>>) -> Self {
        self.scope.bind(name, value);
        self
    }

    pub fn build(self) -> Runtime<C> {
        tracing::debug!(bindings = self.scope.len(), "runtime built");
        Runtime {
            statics: Arc::new(self.scope),
        }
    }
}

impl<C: 'static> Default for RuntimeBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiles and runs programs against one shared static layer.
///
/// A runtime is immutable once built and can be shared across threads; every
/// run gets its own [`Binder`].
pub struct Runtime<C> {
    statics: Arc<StaticScope<C>>,
}

impl<C: 'static> Runtime<C> {
    pub fn builder() -> RuntimeBuilder<C> {
        RuntimeBuilder::new()
    }

    /// A runtime with the keywords and nothing else.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn statics(&self) -> &Arc<StaticScope<C>> {
        &self.statics
    }

    /// A binder over this runtime's static layer with an empty root frame.
    pub fn binder(&self) -> Binder<C> {
        Binder::new(Arc::clone(&self.statics))
    }

    pub fn compile(&self, source: &str) -> Result<Program<C>, EvalError> {
        Ok(Program {
            main: crate::compile(source)?,
            statics: Arc::clone(&self.statics),
        })
    }

    /// Compile `source` and run it once.
    pub fn run(&self, ctx: &C, source: &str) -> EvalResult<C> {
        self.compile(source)?.run(ctx)
    }
}

impl<C: 'static> Default for Runtime<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Runtime<C> {
    fn clone(&self) -> Self {
        Runtime {
            statics: Arc::clone(&self.statics),
        }
    }
}

impl<C> fmt::Debug for Runtime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("bindings", &self.statics.len())
            .finish()
    }
}

/// A compiled program, bound to the static layer it was compiled against.
pub struct Program<C> {
    main: Function<C>,
    statics: Arc<StaticScope<C>>,
}

impl<C> Program<C> {
    /// Run with a fresh binder. Nothing declared by an earlier run is
    /// visible.
    pub fn run(&self, ctx: &C) -> EvalResult<C> {
        let mut binder = Binder::new(Arc::clone(&self.statics));
        self.run_in(ctx, &mut binder)
    }

    /// Run against `binder`, keeping whatever the program declares in it.
    pub fn run_in(&self, ctx: &C, binder: &mut Binder<C>) -> EvalResult<C> {
        self.main.invoke(ctx, binder, &Arguments::new())
    }

    /// The program as a function value.
    pub fn function(&self) -> &Function<C> {
        &self.main
    }
}

impl<C> Clone for Program<C> {
    fn clone(&self) -> Self {
        Program {
            main: self.main.clone(),
            statics: Arc::clone(&self.statics),
        }
    }
}

impl<C> fmt::Debug for Program<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program").field("main", &self.main).finish()
    }
}
