//! The callable shape shared by keywords, host functions, compiled
//! program nodes and user-defined functions.

use std::fmt;
use std::sync::Arc;

use crate::{Arguments, Binder, EvalResult};

/// Signature every callable implements.
pub type NativeFn<C> = dyn Fn(&C, &mut Binder<C>, &Arguments<C>) -> EvalResult<C> + Send + Sync;

/// Reference-counted callable.
///
/// Invoking a function never mutates it; all state lives in the binder or
/// the context it is invoked with. Cloning shares the same callable, and
/// two functions are equal only when they share it.
pub struct Function<C>(Arc<NativeFn<C>>);

impl<C> Function<C> {
    /// Wrap a closure or function item.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&C, &mut Binder<C>, &Arguments<C>) -> EvalResult<C> + Send + Sync + 'static,
    {
        Function(Arc::new(f))
    }

    /// Invoke with the given context, binder and arguments.
    #[inline]
    pub fn invoke(&self, ctx: &C, binder: &mut Binder<C>, args: &Arguments<C>) -> EvalResult<C> {
        (self.0)(ctx, binder, args)
    }

    /// Whether both handles share the same callable.
    pub fn ptr_eq(&self, other: &Function<C>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<C> Clone for Function<C> {
    #[inline]
    fn clone(&self) -> Self {
        Function(Arc::clone(&self.0))
    }
}

impl<C> fmt::Debug for Function<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}
