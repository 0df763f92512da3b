//! Runtime values.
//!
//! `Value<C>` is the single dynamic type flowing through every program.
//! `C` is the host context type handed to every invocation; it only shows
//! up in the signature of [`Function`], but every value that can hold a
//! function must carry it.
//!
//! # Truthiness
//!
//! There is no separate boolean logic: `Null` is false and every other
//! value, including `Bool(false)`, is true. Keywords that produce a truth
//! value return `Bool(true)` or `Null`.
//!
//! # Sharing
//!
//! Strings are immutable and shared through `Arc<str>`. Lists are mutable
//! and shared by reference: cloning a `Value::List` clones the handle, not
//! the items. Functions are shared the same way and compare by identity.

mod list;

use std::fmt;
use std::sync::Arc;

use sprig_stack::ensure_sufficient_stack;

pub use list::ListRef;

use crate::function::Function;

/// Runtime value.
pub enum Value<C> {
    /// Absence of a value, and the canonical "false".
    Null,
    /// Boolean produced by host code or comparison keywords.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Immutable string.
    Str(Arc<str>),
    /// Shared mutable list.
    List(ListRef<C>),
    /// Callable, built-in or user-defined.
    Function(Function<C>),
}

// Factory methods

impl<C> Value<C> {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }

    /// Create a new list holding `items`.
    #[inline]
    pub fn list(items: Vec<Value<C>>) -> Self {
        Value::List(ListRef::new(items))
    }

    /// The truth value keywords return for "yes".
    #[inline]
    pub fn truth() -> Self {
        Value::Bool(true)
    }

    /// Map a Rust bool to `Bool(true)` / `Null`.
    #[inline]
    pub fn from_truth(b: bool) -> Self {
        if b {
            Value::Bool(true)
        } else {
            Value::Null
        }
    }
}

impl<C> Value<C> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Anything but `Null` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !self.is_null()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef<C>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function<C>> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Whether this is an integer or a float.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Name of the value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Function(_) => "function",
        }
    }

    /// Value equality as used by `eq`.
    ///
    /// Values of different kinds are never equal, so `1` and `1.0` differ.
    /// Lists compare item by item; functions by identity.
    /// A list that contains itself equals any list of the same shape.
    pub fn equals(&self, other: &Value<C>) -> bool {
        self.equals_within(other, &mut Vec::new())
    }

    /// Equality that carries the list pairs under comparison.
    pub(crate) fn equals_within(
        &self,
        other: &Value<C>,
        pairs: &mut Vec<(*const (), *const ())>,
    ) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.equals_within(b, pairs),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Debug form. A list already being printed shows as `[...]`.
    pub(crate) fn debug_within(
        &self,
        f: &mut fmt::Formatter<'_>,
        visiting: &mut Vec<*const ()>,
    ) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(list) => {
                if visiting.contains(&list.id()) {
                    return write!(f, "List([...])");
                }
                visiting.push(list.id());
                let result = ensure_sufficient_stack(|| {
                    write!(f, "List([")?;
                    for (i, item) in list.snapshot().iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        item.debug_within(f, visiting)?;
                    }
                    write!(f, "])")
                });
                visiting.pop();
                result
            }
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }

    /// Display form. A list already being printed shows as `[...]`.
    fn display_within(
        &self,
        f: &mut fmt::Formatter<'_>,
        visiting: &mut Vec<*const ()>,
    ) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(list) => {
                if visiting.contains(&list.id()) {
                    return write!(f, "[...]");
                }
                visiting.push(list.id());
                let result = ensure_sufficient_stack(|| {
                    write!(f, "[")?;
                    for (i, item) in list.snapshot().iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        match item {
                            Value::Str(s) => write!(f, "{:?}", &**s)?,
                            other => other.display_within(f, visiting)?,
                        }
                    }
                    write!(f, "]")
                });
                visiting.pop();
                result
            }
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}

// Trait implementations (manual: derives would require `C: Clone` etc.)

impl<C> Clone for Value<C> {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(n) => Value::Int(*n),
            Value::Float(f) => Value::Float(*f),
            Value::Str(s) => Value::Str(Arc::clone(s)),
            Value::List(list) => Value::List(list.clone()),
            Value::Function(f) => Value::Function(f.clone()),
        }
    }
}

impl<C> Default for Value<C> {
    fn default() -> Self {
        Value::Null
    }
}

impl<C> PartialEq for Value<C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<C> fmt::Debug for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_within(f, &mut Vec::new())
    }
}

/// Display form, used by `string` and by string concatenation.
impl<C> fmt::Display for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_within(f, &mut Vec::new())
    }
}

impl<C> From<bool> for Value<C> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<C> From<i64> for Value<C> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl<C> From<f64> for Value<C> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<C> From<&str> for Value<C> {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl<C> From<String> for Value<C> {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl<C> From<Function<C>> for Value<C> {
    fn from(f: Function<C>) -> Self {
        Value::Function(f)
    }
}

impl<C> From<Vec<Value<C>>> for Value<C> {
    fn from(items: Vec<Value<C>>) -> Self {
        Value::list(items)
    }
}
