//! Argument sequences passed to a single invocation.

use std::fmt;

use smallvec::SmallVec;

use crate::convert::FromValue;
use crate::errors::{conversion_failed, EvalError};
use crate::value::Value;

/// Ordered arguments of one invocation.
///
/// Most keywords take at most four arguments, so those stay inline.
/// Lambda blocks handed to `if`, `each` and friends receive the caller's
/// `Arguments` unchanged rather than a fresh set per invocation.
pub struct Arguments<C> {
    values: SmallVec<[Value<C>; 4]>,
}

impl<C> Arguments<C> {
    /// No arguments.
    pub fn new() -> Self {
        Arguments {
            values: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at `index`, if supplied.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value<C>> {
        self.values.get(index)
    }

    /// Argument at `index`, or `Null` when not supplied.
    #[inline]
    pub fn value(&self, index: usize) -> Value<C> {
        self.values.get(index).cloned().unwrap_or_default()
    }

    /// Argument at `index` interpreted as `T`.
    ///
    /// A missing argument is treated as `Null`, which no target type
    /// accepts.
    pub fn get_as<T: FromValue<C>>(&self, index: usize) -> Result<T, EvalError> {
        match self.values.get(index) {
            Some(value) => {
                T::from_value(value).ok_or_else(|| conversion_failed(T::EXPECTED, value.type_name()))
            }
            None => Err(conversion_failed(T::EXPECTED, "null")),
        }
    }

    pub fn first(&self) -> Option<&Value<C>> {
        self.values.first()
    }

    pub fn last(&self) -> Option<&Value<C>> {
        self.values.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value<C>> {
        self.values.iter()
    }

    /// Arguments after the first `n`.
    pub fn skip(&self, n: usize) -> std::slice::Iter<'_, Value<C>> {
        self.values.get(n..).unwrap_or_default().iter()
    }

    pub fn as_slice(&self) -> &[Value<C>] {
        &self.values
    }

    pub fn push(&mut self, value: Value<C>) {
        self.values.push(value);
    }
}

impl<C> Default for Arguments<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Arguments<C> {
    fn clone(&self) -> Self {
        Arguments {
            values: self.values.iter().cloned().collect(),
        }
    }
}

impl<C> fmt::Debug for Arguments<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<C> FromIterator<Value<C>> for Arguments<C> {
    fn from_iter<I: IntoIterator<Item = Value<C>>>(iter: I) -> Self {
        Arguments {
            values: iter.into_iter().collect(),
        }
    }
}

impl<C> From<Vec<Value<C>>> for Arguments<C> {
    fn from(values: Vec<Value<C>>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, C> IntoIterator for &'a Arguments<C> {
    type Item = &'a Value<C>;
    type IntoIter = std::slice::Iter<'a, Value<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
