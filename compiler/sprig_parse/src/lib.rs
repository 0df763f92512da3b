//! Sprig Parse - recursive descent parser for Sprig.
//!
//! ```text
//! program   := expr*
//! expr      := INT | FLOAT | STRING
//!            | '@' IDENT [ args ]      symbol reference / deferred call
//!            | IDENT [ args ]          lookup / call
//!            | '{' expr* '}'           block
//! args      := '(' [ expr { ',' expr } ] ')'
//! ```
//!
//! Expressions in a program or block are separated by whitespace only.

mod ast;
mod cursor;
mod error;
mod grammar;

pub use ast::{Expr, Program, SpannedExpr};
pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use sprig_lexer::{tokenize, SpannedToken};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// A parser over `tokens` lexed from a source of `source_len` bytes.
    pub fn new(tokens: &'a [SpannedToken], source_len: usize) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source_len),
        }
    }
}

/// Tokenize and parse `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized");
    Parser::new(&tokens, source.len()).parse_program()
}
