use pretty_assertions::assert_eq;

use super::{binder, call, list, V};
use crate::EvalErrorKind;

#[test]
fn arithmetic_folds_left_to_right() {
    let mut b = binder();
    let ints = |xs: &[i64]| xs.iter().copied().map(V::Int).collect::<Vec<_>>();
    assert_eq!(call(&mut b, "add", ints(&[2, 3, 5])).unwrap(), V::Int(10));
    assert_eq!(call(&mut b, "subtract", ints(&[10, 1, 2])).unwrap(), V::Int(7));
    assert_eq!(call(&mut b, "multiply", ints(&[2, 3, 4])).unwrap(), V::Int(24));
    assert_eq!(call(&mut b, "divide", ints(&[10, 2])).unwrap(), V::Int(5));
    assert_eq!(call(&mut b, "modulo", ints(&[10, 3])).unwrap(), V::Int(1));
}

#[test]
fn arithmetic_needs_two_operands() {
    let mut b = binder();
    for name in ["add", "subtract", "multiply", "divide", "modulo"] {
        let err = call(&mut b, name, vec![V::Int(1)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::ArityMismatch { .. }), "{name}");
    }
}

#[test]
fn division_by_zero_propagates() {
    let mut b = binder();
    let err = call(&mut b, "divide", vec![V::Int(1), V::Int(0)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn add_on_strings_concatenates() {
    let mut b = binder();
    assert_eq!(
        call(&mut b, "add", vec![V::string("n = "), V::Int(4)]).unwrap(),
        V::string("n = 4")
    );
}

#[test]
fn add_on_a_list_appends() {
    let mut b = binder();
    let items = list(&[1]);
    assert_eq!(
        call(&mut b, "add", vec![items.clone(), V::Int(2), V::Int(3)]).unwrap(),
        V::Int(3)
    );
    assert_eq!(items, list(&[1, 2, 3]));
}

#[test]
fn eq_compares_everything_to_the_first() {
    let mut b = binder();
    assert_eq!(
        call(&mut b, "eq", vec![V::Int(1), V::Int(1), V::Int(1)]).unwrap(),
        V::Bool(true)
    );
    assert_eq!(
        call(&mut b, "eq", vec![V::Int(1), V::Int(1), V::Int(2)]).unwrap(),
        V::Null
    );
    assert_eq!(call(&mut b, "eq", vec![V::Null, V::Null]).unwrap(), V::Bool(true));
    assert_eq!(call(&mut b, "eq", vec![V::Null, V::Int(0)]).unwrap(), V::Null);
    assert_eq!(
        call(&mut b, "eq", vec![list(&[1, 2]), list(&[1, 2])]).unwrap(),
        V::Bool(true)
    );
    assert!(call(&mut b, "eq", vec![V::Int(1)]).is_err());
}

#[test]
fn relations_return_the_left_operand() {
    let mut b = binder();
    assert_eq!(call(&mut b, "mt", vec![V::Int(5), V::Int(3)]).unwrap(), V::Int(5));
    assert_eq!(call(&mut b, "mt", vec![V::Int(3), V::Int(5)]).unwrap(), V::Null);
    assert_eq!(call(&mut b, "lt", vec![V::Int(3), V::Float(3.5)]).unwrap(), V::Int(3));
    assert_eq!(call(&mut b, "mte", vec![V::Int(3), V::Int(3)]).unwrap(), V::Int(3));
    assert_eq!(call(&mut b, "lte", vec![V::Int(4), V::Int(3)]).unwrap(), V::Null);
    assert_eq!(
        call(&mut b, "lt", vec![V::string("apple"), V::string("banana")]).unwrap(),
        V::string("apple")
    );
}

#[test]
fn relations_need_exactly_two_comparable_operands() {
    let mut b = binder();
    assert!(call(&mut b, "mt", vec![V::Int(1), V::Int(2), V::Int(3)]).is_err());
    let err = call(&mut b, "lt", vec![V::Null, V::Int(1)]).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidOperands { .. }));
}

#[test]
fn not_inverts_truthiness() {
    let mut b = binder();
    assert_eq!(call(&mut b, "not", vec![V::Null]).unwrap(), V::Bool(true));
    assert_eq!(call(&mut b, "not", vec![V::Int(0)]).unwrap(), V::Null);
    assert_eq!(call(&mut b, "not", vec![V::Bool(false)]).unwrap(), V::Null);
    assert!(call(&mut b, "not", vec![]).is_err());
}
