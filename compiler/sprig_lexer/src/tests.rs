// Tests for the Sprig lexer
//
// - Every token kind
// - String escapes and their errors
// - Comments and whitespace
// - Property-based tests for identifiers, integers and totality

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use proptest::prelude::*;
use test_case::test_case;

// ============================================================================
// Helper Functions
// ============================================================================

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.value)
        .collect()
}

fn single_token(source: &str) -> Token {
    let toks = tokens(source);
    assert_eq!(toks.len(), 1, "expected 1 token, got {toks:?}");
    toks.into_iter().next().unwrap()
}

fn error_kind(source: &str) -> LexErrorKind {
    tokenize(source).unwrap_err().kind
}

// ============================================================================
// Token Kinds
// ============================================================================

#[test_case("(" => Token::LParen; "left paren")]
#[test_case(")" => Token::RParen; "right paren")]
#[test_case("{" => Token::LBrace; "left brace")]
#[test_case("}" => Token::RBrace; "right brace")]
#[test_case("," => Token::Comma; "comma")]
#[test_case("@" => Token::At; "at")]
#[test_case("57" => Token::Int(57); "integer")]
#[test_case("-3" => Token::Int(-3); "negative integer")]
#[test_case("5.7" => Token::Float(5.7); "float")]
#[test_case("-0.5" => Token::Float(-0.5); "negative float")]
#[test_case("foo_Bar9" => Token::Ident("foo_Bar9".into()); "identifier")]
#[test_case("_" => Token::Ident("_".into()); "underscore identifier")]
fn single_tokens(source: &str) -> Token {
    single_token(source)
}

#[test]
fn call_expression() {
    assert_eq!(
        tokens("add(@x, 1)"),
        vec![
            Token::Ident("add".into()),
            Token::LParen,
            Token::At,
            Token::Ident("x".into()),
            Token::Comma,
            Token::Int(1),
            Token::RParen,
        ]
    );
}

#[test]
fn spans_are_byte_ranges() {
    let toks = tokenize("var(@x)").unwrap();
    let spans: Vec<_> = toks.iter().map(|t| t.span.clone()).collect();
    assert_eq!(spans, vec![0..3, 3..4, 4..5, 5..6, 6..7]);
}

// ============================================================================
// Strings
// ============================================================================

#[test_case(r#""hello world""# => "hello world"; "double quoted")]
#[test_case("'single'" => "single"; "single quoted")]
#[test_case(r#""it's""# => "it's"; "other quote inside")]
#[test_case(r#""a\nb\tc\rd""# => "a\nb\tc\rd"; "control escapes")]
#[test_case(r#""q\"q\\""# => "q\"q\\"; "quote and backslash escapes")]
#[test_case(r"'\''" => "'"; "escaped single quote")]
#[test_case(r#""""# => ""; "empty")]
fn string_literals(source: &str) -> String {
    match single_token(source) {
        Token::Str(s) => s,
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn invalid_escape() {
    assert_eq!(error_kind(r#""bad \q""#), LexErrorKind::InvalidEscape('q'));
}

#[test]
fn unterminated_string() {
    assert_eq!(error_kind(r#"add("open"#), LexErrorKind::UnterminatedString);
    assert_eq!(error_kind("'open"), LexErrorKind::UnterminatedString);
}

// ============================================================================
// Comments and Whitespace
// ============================================================================

#[test]
fn comments_are_skipped() {
    let source = "
        // line comment
        var(@x, /* inline */ 1)
        /* multi
           line ** comment */
    ";
    assert_eq!(
        tokens(source),
        vec![
            Token::Ident("var".into()),
            Token::LParen,
            Token::At,
            Token::Ident("x".into()),
            Token::Comma,
            Token::Int(1),
            Token::RParen,
        ]
    );
}

#[test]
fn empty_input() {
    assert!(tokens("").is_empty());
    assert!(tokens("  \n\t // nothing\n").is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unexpected_character_reports_position() {
    let err = tokenize("add(1, #)").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);
    assert_eq!(err.span, 7..8);
    assert_eq!(err.to_string(), "unexpected character at position 7: '#'");
}

#[test]
fn integer_out_of_range() {
    assert_eq!(
        error_kind("99999999999999999999"),
        LexErrorKind::IntegerOutOfRange
    );
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #[test]
    fn identifiers_lex_to_ident(name in "[a-zA-Z_][a-zA-Z0-9_]{0,20}") {
        prop_assert_eq!(single_token(&name), Token::Ident(name.clone()));
    }

    #[test]
    fn integers_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(single_token(&n.to_string()), Token::Int(n));
    }

    #[test]
    fn tokenize_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn spans_are_in_bounds_and_ordered(source in "[a-z0-9(){},@ .\"']{0,40}") {
        if let Ok(toks) = tokenize(&source) {
            let mut last_end = 0;
            for tok in toks {
                prop_assert!(tok.span.start >= last_end);
                prop_assert!(tok.span.end <= source.len());
                last_end = tok.span.end;
            }
        }
    }
}
