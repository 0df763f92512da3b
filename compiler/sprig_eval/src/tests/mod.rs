//! Keyword tests.
//!
//! These drive the keywords directly, building blocks as Rust closures
//! instead of compiling source; the source-level behaviour is covered by
//! the integration tests of `sprig_compile`.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod math_tests;
mod text_tests;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{not_callable, Arguments, Binder, EvalResult, Function, StaticScope, Value};

type V = Value<()>;

fn binder() -> Binder<()> {
    Binder::new(Arc::new(StaticScope::standard()))
}

/// Invoke whatever `name` is bound to.
fn call(binder: &mut Binder<()>, name: &str, args: Vec<V>) -> EvalResult<()> {
    let target = binder.lookup(name)?;
    let Some(function) = target.as_function() else {
        return Err(not_callable(name, target.type_name()));
    };
    function.invoke(&(), binder, &Arguments::from(args))
}

fn sym(name: &str) -> V {
    V::string(name)
}

fn list(items: &[i64]) -> V {
    V::list(items.iter().copied().map(V::Int).collect())
}

/// A block that evaluates `f` against the binder it is invoked with.
fn block<F>(f: F) -> V
where
    F: Fn(&mut Binder<()>) -> EvalResult<()> + Send + Sync + 'static,
{
    V::Function(Function::new(move |_: &(), binder: &mut Binder<()>, _: &Arguments<()>| {
        f(binder)
    }))
}

/// A block returning `value` and counting its invocations.
fn counted(value: V, hits: &Arc<AtomicUsize>) -> V {
    let hits = Arc::clone(hits);
    block(move |_| {
        hits.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    })
}

fn hits(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

#[test]
fn every_keyword_is_reachable_from_a_fresh_binder() {
    let binder = binder();
    for name in crate::keywords::KEYWORDS.iter().filter(|name| **name != "eval") {
        assert!(
            binder.lookup(name).is_ok_and(|v| v.as_function().is_some()),
            "{name}"
        );
    }
    assert!(binder.lookup("eval").is_err());
}
