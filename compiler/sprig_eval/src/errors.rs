//! The runtime error raised by every keyword, binder operation and
//! compiled program.
//!
//! There is exactly one error type. `EvalErrorKind` categorises the failure
//! so hosts and tests can match on it, but every kind aborts evaluation in
//! the same way: the error propagates through all enclosing invocations,
//! popping their frames on the way out.
//!
//! Construct errors through the `#[cold]` factory functions below rather
//! than by hand; they keep `kind` and `message` consistent.

use std::fmt;

use crate::value::Value;

/// Result of evaluating anything that produces a value.
pub type EvalResult<C> = Result<Value<C>, EvalError>;

/// How many arguments a keyword accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    /// Whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn noun(n: usize) -> &'static str {
            if n == 1 {
                "argument"
            } else {
                "arguments"
            }
        }
        match *self {
            Arity::Exactly(n) => write!(f, "exactly {n} {}", noun(n)),
            Arity::AtLeast(n) => write!(f, "at least {n} {}", noun(n)),
            Arity::Between(lo, hi) => write!(f, "{lo} to {hi} arguments"),
        }
    }
}

/// Typed category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Invocation shape
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },
    TypeMismatch {
        name: String,
        position: usize,
        expected: &'static str,
        got: &'static str,
    },
    TooManyArguments {
        declared: usize,
        got: usize,
    },
    NotCallable {
        name: String,
        type_name: &'static str,
    },

    // Symbols
    UndefinedSymbol {
        name: String,
    },
    DuplicateSymbol {
        name: String,
    },
    InvalidSymbolName {
        name: String,
    },

    // Collections and text
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    InvalidRange {
        start: usize,
        end: usize,
    },

    // Arithmetic
    InvalidOperands {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Conversions
    NumberFormat {
        text: String,
    },
    Conversion {
        expected: &'static str,
        got: &'static str,
    },

    /// Source text could not be tokenized or parsed.
    Compile {
        message: String,
    },

    /// Failure without a structured category.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "'{name}' requires {expected}, got {got}"),
            Self::TypeMismatch {
                name,
                position,
                expected,
                got,
            } => write!(
                f,
                "'{name}' expects {expected} as argument {position}, got {got}"
            ),
            Self::TooManyArguments { declared, got } => write!(
                f,
                "function declares {declared} parameters but was invoked with {got} arguments"
            ),
            Self::NotCallable { name, type_name } => {
                write!(f, "'{name}' is {type_name}, not a function")
            }

            Self::UndefinedSymbol { name } => write!(f, "symbol '{name}' has not been declared"),
            Self::DuplicateSymbol { name } => {
                write!(f, "symbol '{name}' has already been declared")
            }
            Self::InvalidSymbolName { name } => write!(
                f,
                "'{name}' is not a legal symbol name: symbols start with a letter or underscore, \
                 followed by letters, digits or underscores"
            ),

            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} items")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "end {end} must be larger than start {start}")
            }

            Self::InvalidOperands {
                operation,
                left,
                right,
            } => write!(f, "cannot {operation} {left} and {right}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),

            Self::NumberFormat { text } => write!(f, "'{text}' is not a number"),
            Self::Conversion { expected, got } => {
                write!(f, "cannot interpret {got} as {expected}")
            }

            Self::Compile { message } | Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Runtime error of the language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Human-readable message. Equals `kind.to_string()` unless the error
    /// crossed an `eval` boundary, which prefixes it.
    pub message: String,
}

impl EvalError {
    /// An error with only a message (`Custom` kind).
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Mark this error as raised by a program run through `eval`.
    #[must_use]
    pub fn in_eval(mut self) -> Self {
        self.message = format!("eval: {}", self.message);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Invocation shape

/// Keyword invoked with an unsupported number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Keyword argument (1-based `position`) has the wrong kind of value.
#[cold]
pub fn wrong_arg_type(
    name: &str,
    position: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        name: name.to_string(),
        position,
        expected,
        got,
    })
}

/// User function invoked with more arguments than it declares.
#[cold]
pub fn too_many_arguments(declared: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments { declared, got })
}

/// Invocation target is bound to something other than a function.
#[cold]
pub fn not_callable(name: &str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        name: name.to_string(),
        type_name,
    })
}

// Symbols

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_symbol_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidSymbolName {
        name: name.to_string(),
    })
}

// Collections and text

#[cold]
pub fn index_out_of_range(index: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

#[cold]
pub fn invalid_range(start: usize, end: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidRange { start, end })
}

// Arithmetic

/// No implementation of `operation` exists for the operand pair.
#[cold]
pub fn invalid_operands(operation: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperands {
        operation,
        left,
        right,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Conversions

#[cold]
pub fn number_format(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NumberFormat {
        text: text.to_string(),
    })
}

#[cold]
pub fn conversion_failed(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Conversion { expected, got })
}

/// Source text that failed to tokenize or parse.
#[cold]
pub fn compile_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Compile {
        message: message.into(),
    })
}
