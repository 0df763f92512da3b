//! Token cursor for navigating the token stream.

use std::mem;

use sprig_lexer::{Span, SpannedToken, Token};
use tracing::trace;

use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    /// Zero-width span just past the last byte of the source.
    eof: Span,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [SpannedToken], source_len: usize) -> Self {
        Cursor {
            tokens,
            pos: 0,
            eof: source_len..source_len,
        }
    }

    // -------------------------------------------------------------------------
    // Token Access
    // -------------------------------------------------------------------------

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|t| &t.value)
    }

    pub fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or_else(|| self.eof.clone(), |t| t.span.clone())
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(t) => t.span.clone(),
            None => 0..0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    // -------------------------------------------------------------------------
    // Lookahead
    // -------------------------------------------------------------------------

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Whether the current token has the same kind as `kind`.
    pub fn check(&self, kind: &Token) -> bool {
        self.current()
            .is_some_and(|t| mem::discriminant(t) == mem::discriminant(kind))
    }

    // -------------------------------------------------------------------------
    // Token Consumption
    // -------------------------------------------------------------------------

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current();
        if token.is_some() {
            trace!(pos = self.pos, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the same kind as `kind`, or fail naming it.
    pub fn expect(&mut self, kind: &Token) -> Result<Span, ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(self.previous_span())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.current() {
            Some(Token::Ident(name)) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    /// An error for the current token, which is not `expected`.
    #[cold]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let found = match self.current() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        };
        ParseError::new(
            format!("expected {expected}, found {found}"),
            self.current_span(),
        )
    }
}
