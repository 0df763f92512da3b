use pretty_assertions::assert_eq;

use super::{binder, call, list, V};
use crate::EvalErrorKind;

#[test]
fn string_uses_display_form() {
    let mut b = binder();
    assert_eq!(call(&mut b, "string", vec![V::Int(42)]).unwrap(), V::string("42"));
    assert_eq!(call(&mut b, "string", vec![V::Float(1.5)]).unwrap(), V::string("1.5"));
    assert_eq!(call(&mut b, "string", vec![V::string("s")]).unwrap(), V::string("s"));
    assert_eq!(call(&mut b, "string", vec![list(&[1, 2])]).unwrap(), V::string("[1, 2]"));
    assert_eq!(call(&mut b, "string", vec![V::Null]).unwrap(), V::Null);
    assert!(call(&mut b, "string", vec![]).is_err());
}

#[test]
fn number_parses_by_decimal_point() {
    let mut b = binder();
    assert_eq!(call(&mut b, "number", vec![V::string("57")]).unwrap(), V::Int(57));
    assert_eq!(call(&mut b, "number", vec![V::string("-3")]).unwrap(), V::Int(-3));
    assert_eq!(call(&mut b, "number", vec![V::string("5.7")]).unwrap(), V::Float(5.7));
    assert_eq!(call(&mut b, "number", vec![V::Int(3)]).unwrap(), V::Int(3));
    assert_eq!(call(&mut b, "number", vec![V::Float(0.5)]).unwrap(), V::Float(0.5));
}

#[test]
fn number_rejects_garbage() {
    let mut b = binder();
    let err = call(&mut b, "number", vec![V::string("12abc")]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NumberFormat {
            text: "12abc".to_string()
        }
    );
    assert!(call(&mut b, "number", vec![V::string("1.2.3")]).is_err());
    assert!(call(&mut b, "number", vec![V::Null]).is_err());
}

#[test]
fn substr_counts_characters() {
    let mut b = binder();
    let s = V::string("héllo world");
    assert_eq!(
        call(&mut b, "substr", vec![s.clone(), V::Int(1), V::Int(4)]).unwrap(),
        V::string("éllo")
    );
    assert_eq!(
        call(&mut b, "substr", vec![s.clone(), V::Int(6)]).unwrap(),
        V::string("world")
    );
    assert_eq!(
        call(&mut b, "substr", vec![s.clone(), V::Int(11)]).unwrap(),
        V::string("")
    );
    assert!(call(&mut b, "substr", vec![s.clone(), V::Int(12)]).is_err());
    assert!(call(&mut b, "substr", vec![s.clone(), V::Int(8), V::Int(4)]).is_err());
    assert!(call(&mut b, "substr", vec![s]).is_err());
}

#[test]
fn length_counts_characters() {
    let mut b = binder();
    assert_eq!(call(&mut b, "length", vec![V::string("héllo")]).unwrap(), V::Int(5));
    assert_eq!(call(&mut b, "length", vec![V::string("")]).unwrap(), V::Int(0));
    assert!(call(&mut b, "length", vec![V::Null]).is_err());
}

#[test]
fn text_keywords_reject_lists_and_booleans() {
    let mut b = binder();
    let err = call(&mut b, "length", vec![list(&[1, 2])]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::Conversion {
            expected: "a string",
            got: "list",
        }
    );
    assert!(call(&mut b, "length", vec![V::Bool(true)]).is_err());
    assert!(call(&mut b, "substr", vec![list(&[1]), V::Int(0)]).is_err());
    assert_eq!(call(&mut b, "length", vec![V::Int(123)]).unwrap(), V::Int(3));
}

#[test]
fn replace_all_occurrences() {
    let mut b = binder();
    let result = call(
        &mut b,
        "replace",
        vec![V::string("a-b-c"), V::string("-"), V::string("+")],
    );
    assert_eq!(result.unwrap(), V::string("a+b+c"));
    assert!(call(
        &mut b,
        "replace",
        vec![V::string("abc"), V::string(""), V::string("x")]
    )
    .is_err());
    assert!(call(&mut b, "replace", vec![V::string("abc"), V::string("a")]).is_err());
}
