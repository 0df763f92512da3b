//! Sprig Lexer - turns source text into a flat token stream.
//!
//! The grammar is small: parentheses, braces, commas, the `@` prefix,
//! integer, float and string literals, and identifiers. Whitespace and
//! `//` / `/* */` comments are skipped.

use std::fmt;
use std::ops::Range;

use logos::{Lexer, Logos};

/// Byte range in the source.
pub type Span = Range<usize>;

/// Why a piece of source could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscape(char),
    IntegerOutOfRange,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Comments
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip)]
    BlockComment,

    // Symbols
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("@")]
    At,

    // Literals
    #[regex(r"-?[0-9]+", parse_int)]
    Int(i64),

    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#, string_literal)]
    #[regex(r#"'([^'\\]|\\.)*'"#, string_literal)]
    #[regex(r#""([^"\\]|\\.)*"#, unterminated)]
    #[regex(r#"'([^'\\]|\\.)*"#, unterminated)]
    Str(String),

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

fn parse_int(lex: &mut Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
        .parse()
        .map_err(|_| LexErrorKind::IntegerOutOfRange)
}

fn string_literal(lex: &mut Lexer<Token>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    // Both delimiters are single-byte ASCII.
    unescape(&slice[1..slice.len() - 1])
}

fn unterminated(_: &mut Lexer<Token>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

/// Resolve `\n`, `\t`, `\r`, `\\`, `\"` and `\'`.
fn unescape(body: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(c @ ('\\' | '"' | '\'')) => out.push(c),
            Some(other) => return Err(LexErrorKind::InvalidEscape(other)),
            None => return Err(LexErrorKind::UnterminatedString),
        }
    }
    Ok(out)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LineComment | Token::BlockComment => write!(f, "comment"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::At => write!(f, "'@'"),
            Token::Int(n) => write!(f, "integer {n}"),
            Token::Float(n) => write!(f, "float {n}"),
            Token::Str(s) => write!(f, "string {s:?}"),
            Token::Ident(name) => write!(f, "'{name}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

pub type SpannedToken = Spanned<Token>;

/// Tokenizer failure with the offending source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// The offending source text.
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.span.start;
        match &self.kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f, "unexpected character at position {at}: '{}'", self.text)
            }
            LexErrorKind::UnterminatedString => {
                write!(f, "unterminated string starting at position {at}")
            }
            LexErrorKind::InvalidEscape(c) => {
                write!(f, "invalid escape '\\{c}' in string at position {at}")
            }
            LexErrorKind::IntegerOutOfRange => {
                write!(f, "integer literal at position {at} is out of range: {}", self.text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(Spanned { value: token, span }),
            Err(kind) => {
                return Err(LexError {
                    kind,
                    text: lexer.slice().to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;
