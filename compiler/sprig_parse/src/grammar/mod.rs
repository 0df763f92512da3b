//! Expression grammar.

use sprig_lexer::Token;
use sprig_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ErrorContext, Expr, ParseError, Parser, Program, SpannedExpr};

impl Parser<'_> {
    /// Parse every remaining token as one program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(
                self.parse_expr()
                    .map_err(|e| e.in_context(ErrorContext::Program))?,
            );
        }
        Ok(Program { body })
    }

    /// Parse one expression.
    ///
    /// Blocks and argument lists recurse through here, so nesting depth is
    /// limited only by memory.
    pub(crate) fn parse_expr(&mut self) -> Result<SpannedExpr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<SpannedExpr, ParseError> {
        let start = self.cursor.current_span().start;
        trace!(pos = self.cursor.position(), "parse_expr");

        let expr = match self.cursor.current() {
            Some(Token::Int(n)) => {
                let n = *n;
                self.cursor.advance();
                Expr::Int(n)
            }
            Some(Token::Float(f)) => {
                let f = *f;
                self.cursor.advance();
                Expr::Float(f)
            }
            Some(Token::Str(s)) => {
                let s = s.clone();
                self.cursor.advance();
                Expr::Str(s)
            }
            Some(Token::At) => {
                self.cursor.advance();
                let name = self
                    .cursor
                    .expect_ident()
                    .map_err(|e| e.in_context(ErrorContext::SymbolReference))?;
                if self.cursor.check(&Token::LParen) {
                    Expr::Call {
                        target: name,
                        args: self.parse_args()?,
                        deferred: true,
                    }
                } else {
                    Expr::Symbol(name)
                }
            }
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.cursor.advance();
                if self.cursor.check(&Token::LParen) {
                    Expr::Call {
                        target: name,
                        args: self.parse_args()?,
                        deferred: false,
                    }
                } else {
                    Expr::Lookup(name)
                }
            }
            Some(Token::LBrace) => Expr::Block(self.parse_block()?),
            _ => return Err(self.cursor.unexpected("an expression")),
        };

        let end = self.cursor.previous_span().end;
        Ok(SpannedExpr::new(expr, start..end))
    }

    /// `'(' [ expr { ',' expr } ] ')'`
    fn parse_args(&mut self) -> Result<Vec<SpannedExpr>, ParseError> {
        self.cursor.expect(&Token::LParen)?;
        let mut args = Vec::new();
        if self.cursor.check(&Token::RParen) {
            self.cursor.advance();
            return Ok(args);
        }
        loop {
            args.push(
                self.parse_expr()
                    .map_err(|e| e.in_context(ErrorContext::Arguments))?,
            );
            match self.cursor.current() {
                Some(Token::Comma) => {
                    self.cursor.advance();
                }
                Some(Token::RParen) => {
                    self.cursor.advance();
                    return Ok(args);
                }
                _ => {
                    return Err(self
                        .cursor
                        .unexpected("',' or ')'")
                        .in_context(ErrorContext::Arguments))
                }
            }
        }
    }

    /// `'{' expr* '}'`
    fn parse_block(&mut self) -> Result<Vec<SpannedExpr>, ParseError> {
        self.cursor.expect(&Token::LBrace)?;
        let mut body = Vec::new();
        while !self.cursor.check(&Token::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("'}'").in_context(ErrorContext::Block));
            }
            body.push(
                self.parse_expr()
                    .map_err(|e| e.in_context(ErrorContext::Block))?,
            );
        }
        self.cursor.advance();
        Ok(body)
    }
}
