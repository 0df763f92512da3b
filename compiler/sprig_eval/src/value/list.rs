//! Shared mutable list storage.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use sprig_stack::ensure_sufficient_stack;

use super::Value;

/// Handle to a list shared by every value that refers to it.
///
/// Locks are held only for the duration of a single operation and never
/// across the invocation of a program callable; `each` iterates over a
/// [`snapshot`](ListRef::snapshot) so its body may append to the list it
/// walks.
#[repr(transparent)]
pub struct ListRef<C>(Arc<RwLock<Vec<Value<C>>>>);

impl<C> ListRef<C> {
    /// Allocate a new list.
    pub fn new(items: Vec<Value<C>>) -> Self {
        ListRef(Arc::new(RwLock::new(items)))
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Value<C>> {
        self.0.read().get(index).cloned()
    }

    /// Append every item, returning the new last item.
    pub fn extend<I>(&self, items: I) -> Option<Value<C>>
    where
        I: IntoIterator<Item = Value<C>>,
    {
        let mut guard = self.0.write();
        guard.extend(items);
        guard.last().cloned()
    }

    /// Copy of the items in `[start, end)`, or `None` when out of range.
    pub fn range(&self, start: usize, end: usize) -> Option<Vec<Value<C>>> {
        self.0.read().get(start..end).map(<[Value<C>]>::to_vec)
    }

    /// Copy of all items at this moment.
    pub fn snapshot(&self) -> Vec<Value<C>> {
        self.0.read().clone()
    }

    /// Whether both handles refer to the same list.
    pub fn ptr_eq(&self, other: &ListRef<C>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared storage, used to detect cycles.
    pub(crate) fn id(&self) -> *const () {
        Arc::as_ptr(&self.0).cast()
    }

    /// Item-by-item equality.
    ///
    /// A list may contain itself; a pair of lists met again while it is
    /// still being compared counts as equal.
    pub fn equals(&self, other: &ListRef<C>) -> bool {
        self.equals_within(other, &mut Vec::new())
    }

    pub(crate) fn equals_within(
        &self,
        other: &ListRef<C>,
        pairs: &mut Vec<(*const (), *const ())>,
    ) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let pair = (self.id(), other.id());
        if pairs.contains(&pair) {
            return true;
        }
        let (a, b) = (self.snapshot(), other.snapshot());
        if a.len() != b.len() {
            return false;
        }
        pairs.push(pair);
        let equal = ensure_sufficient_stack(|| {
            a.iter().zip(&b).all(|(x, y)| x.equals_within(y, pairs))
        });
        pairs.pop();
        equal
    }
}

impl<C> Clone for ListRef<C> {
    #[inline]
    fn clone(&self) -> Self {
        ListRef(Arc::clone(&self.0))
    }
}

impl<C> fmt::Debug for ListRef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ListRef(")?;
        Value::List(self.clone()).debug_within(f, &mut Vec::new())?;
        f.write_str(")")
    }
}
