//! Stack growth for recursion driven by user programs.
//!
//! Sprig programs recurse on the native stack twice over: the parser
//! descends once per nested block or call, and every user-function
//! invocation nests a closure call inside the one that invoked it. Neither
//! depth is bounded by anything but the program itself, so both paths run
//! their recursive step through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh stack segment
//! when the remaining space drops under [`RED_ZONE`]. On `wasm32` the
//! closure is called directly.

/// Remaining stack (in bytes) below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (in bytes).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the native stack if less than [`RED_ZONE`]
/// bytes remain.
///
/// ```text
/// ensure_sufficient_stack(|| body.invoke(ctx, &mut frame, args))
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining native stack in bytes, if the platform can report it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// Remaining native stack in bytes, if the platform can report it.
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
