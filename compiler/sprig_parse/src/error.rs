//! Parse errors.

use std::fmt;

use sprig_lexer::{LexError, Span};

/// What was being parsed when an error occurred, for "while parsing X"
/// messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorContext {
    Program,
    Block,
    Arguments,
    SymbolReference,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::Program => "a program",
            ErrorContext::Block => "a block",
            ErrorContext::Arguments => "an argument list",
            ErrorContext::SymbolReference => "a symbol reference",
        }
    }
}

/// Source that could not be tokenized or parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Record the enclosing construct, keeping the innermost one.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)?;
        if let Some(context) = self.context {
            write!(f, " while parsing {}", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span.clone();
        ParseError::new(err.to_string(), span)
    }
}
