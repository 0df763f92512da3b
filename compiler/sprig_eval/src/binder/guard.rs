//! RAII frame guard.

use std::ops::{Deref, DerefMut};

use super::Binder;

/// Pops the frame pushed by [`Binder::scoped`] when dropped, including
/// when the body it guards returns an error or panics.
///
/// Derefs to the binder, so the guarded body uses it directly:
///
/// ```text
/// let mut frame = binder.scoped();
/// frame.bind_local("x", value);
/// body.invoke(ctx, &mut frame, args)
/// ```
pub struct FrameGuard<'a, C> {
    binder: &'a mut Binder<C>,
}

impl<'a, C> FrameGuard<'a, C> {
    pub(super) fn new(binder: &'a mut Binder<C>) -> Self {
        FrameGuard { binder }
    }
}

impl<C> Drop for FrameGuard<'_, C> {
    fn drop(&mut self) {
        self.binder.pop_frame();
    }
}

impl<C> Deref for FrameGuard<'_, C> {
    type Target = Binder<C>;

    fn deref(&self) -> &Self::Target {
        self.binder
    }
}

impl<C> DerefMut for FrameGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.binder
    }
}
