//! Symbol scopes for one evaluation.
//!
//! A [`Binder`] is two layers:
//!
//! - a shared, read-only [`StaticScope`] holding every keyword and host
//!   binding, registered before any program runs;
//! - a stack of dynamic frames holding everything a program declares.
//!   There is always at least one (root) frame.
//!
//! Lookup and mutation search the dynamic frames from innermost to
//! outermost; lookup then falls back to the static layer. Declaration only
//! considers the dynamic frames, so a program may `var` a name that
//! shadows a keyword, while `set` on an unshadowed keyword fails.
//!
//! Frames are plain `FxHashMap`s in a `Vec` used as a stack. Function
//! invocations push one frame through [`Binder::scoped`], whose guard
//! pops it on every exit path.

mod guard;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

pub use guard::FrameGuard;

use crate::errors::{duplicate_symbol, undefined_symbol, EvalError};
use crate::value::Value;

type Frame<C> = FxHashMap<String, Value<C>>;

/// Names bound before any program runs.
pub struct StaticScope<C> {
    symbols: FxHashMap<String, Value<C>>,
}

impl<C> StaticScope<C> {
    /// An empty scope, without keywords.
    pub fn new() -> Self {
        StaticScope {
            symbols: FxHashMap::default(),
        }
    }

    /// Bind `name`, replacing any earlier binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value<C>>) {
        self.symbols.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value<C>> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

impl<C> Default for StaticScope<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for StaticScope<C> {
    fn clone(&self) -> Self {
        StaticScope {
            symbols: self.symbols.clone(),
        }
    }
}

impl<C> fmt::Debug for StaticScope<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("StaticScope").field("names", &names).finish()
    }
}

/// Scope chain of one program evaluation.
///
/// Not shared between threads: every concurrent evaluation gets its own
/// binder, typically through [`Binder::fresh`]. The static layer is behind
/// an `Arc`, so fresh binders are cheap.
pub struct Binder<C> {
    statics: Arc<StaticScope<C>>,
    frames: Vec<Frame<C>>,
}

impl<C> Binder<C> {
    /// A binder over `statics` with a single empty frame.
    pub fn new(statics: Arc<StaticScope<C>>) -> Self {
        Binder {
            statics,
            frames: vec![Frame::default()],
        }
    }

    /// A new binder sharing this one's static layer but none of its frames.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Binder::new(Arc::clone(&self.statics))
    }

    pub fn statics(&self) -> &Arc<StaticScope<C>> {
        &self.statics
    }

    /// Number of dynamic frames, including the root frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame. The root frame is never popped.
    #[inline]
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Whether `name` is declared in any dynamic frame.
    pub fn is_declared(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains_key(name))
    }

    /// Whether `name` resolves to anything, static bindings included.
    pub fn is_bound(&self, name: &str) -> bool {
        self.is_declared(name) || self.statics.contains(name)
    }

    pub fn declared_in_current_frame(&self, name: &str) -> bool {
        self.current().contains_key(name)
    }

    /// Value of `name`, innermost binding first, statics last.
    pub fn get(&self, name: &str) -> Option<Value<C>> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .or_else(|| self.statics.get(name))
            .cloned()
    }

    /// Like [`get`](Binder::get), failing for unbound names.
    pub fn lookup(&self, name: &str) -> Result<Value<C>, EvalError> {
        self.get(name).ok_or_else(|| undefined_symbol(name))
    }

    /// Declare `name` in the current frame.
    ///
    /// Fails if any dynamic frame already declares it.
    pub fn declare(&mut self, name: &str, value: Value<C>) -> Result<(), EvalError> {
        if self.is_declared(name) {
            return Err(duplicate_symbol(name));
        }
        self.current_mut().insert(name.to_string(), value);
        Ok(())
    }

    /// Replace the value of the innermost dynamic binding of `name`.
    pub fn mutate(&mut self, name: &str, value: Value<C>) -> Result<(), EvalError> {
        match self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(undefined_symbol(name)),
        }
    }

    /// Bind `name` in the current frame without checking outer frames.
    ///
    /// Used for parameters and loop variables, which deliberately hide
    /// outer bindings of the same name.
    pub fn bind_local(&mut self, name: &str, value: Value<C>) {
        self.current_mut().insert(name.to_string(), value);
    }

    pub fn remove_from_current_frame(&mut self, name: &str) -> Option<Value<C>> {
        self.current_mut().remove(name)
    }

    /// Push a frame that is popped when the returned guard drops.
    pub fn scoped(&mut self) -> FrameGuard<'_, C> {
        self.push_frame();
        FrameGuard::new(self)
    }

    /// Run `f` inside a new frame.
    pub fn with_frame<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Binder<C>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    fn current(&self) -> &Frame<C> {
        // `frames` is never empty: `new` creates the root and `pop_frame` keeps it.
        &self.frames[self.frames.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Frame<C> {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }
}

impl<C> fmt::Debug for Binder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("statics", &self.statics.len())
            .field("frames", &self.frames)
            .finish()
    }
}
