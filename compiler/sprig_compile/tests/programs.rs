//! Whole programs run through the runtime.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sprig_compile::Runtime;
use sprig_eval::{Arguments, Binder, EvalError, EvalErrorKind, Function, Value, keywords::KEYWORDS};

type V = Value<()>;

fn run(source: &str) -> Result<V, EvalError> {
    Runtime::<()>::new().run(&(), source)
}

fn ok(source: &str) -> V {
    match run(source) {
        Ok(value) => value,
        Err(err) => panic!("{source:?} failed: {err}"),
    }
}

fn kind(source: &str) -> EvalErrorKind {
    run(source).unwrap_err().kind
}

fn ints(items: &[i64]) -> V {
    V::list(items.iter().copied().map(V::Int).collect())
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn var_twice_fails() {
    assert_eq!(
        kind("var(@x) var(@x)"),
        EvalErrorKind::DuplicateSymbol { name: "x".into() }
    );
}

#[test]
fn var_defaults_to_null() {
    assert_eq!(ok("var(@x) x"), V::Null);
}

#[test]
fn set_requires_a_declaration() {
    assert_eq!(
        kind("set(@y, 1)"),
        EvalErrorKind::UndefinedSymbol { name: "y".into() }
    );
    assert_eq!(ok("var(@x, 1) set(@x, 2) x"), V::Int(2));
    assert_eq!(ok("var(@x) set(@x, 5)"), V::Int(5));
}

#[test]
fn keywords_are_reachable_and_can_be_shadowed() {
    let runtime = Runtime::<()>::new();
    let binder = runtime.binder();
    for name in KEYWORDS {
        assert!(binder.get(name).and_then(|v| v.as_function().cloned()).is_some(), "{name}");
        let program = format!("var(@{name}, 1) {name}");
        assert_eq!(runtime.run(&(), &program).unwrap(), V::Int(1), "{name}");
    }
}

#[test]
fn set_cannot_rebind_a_keyword() {
    assert_eq!(
        kind("set(@add, 1)"),
        EvalErrorKind::UndefinedSymbol { name: "add".into() }
    );
}

// ============================================================================
// Arithmetic and Comparison
// ============================================================================

#[test]
fn arithmetic_folds() {
    assert_eq!(ok("add(2, 3, 5)"), V::Int(10));
    assert_eq!(ok("subtract(10, 1, 2)"), V::Int(7));
    assert_eq!(ok("divide(10, 2)"), V::Int(5));
    assert_eq!(ok("modulo(7, 3)"), V::Int(1));
    assert_eq!(ok("multiply(2, 2.5)"), V::Float(5.0));
    assert_eq!(ok(r#"add("a", 1, "b")"#), V::string("a1b"));
    assert_eq!(kind("divide(1, 0)"), EvalErrorKind::DivisionByZero);
}

#[test]
fn equality() {
    assert_eq!(ok("eq(1, 1, 1)"), V::Bool(true));
    assert_eq!(ok("eq(1, 1, 2)"), V::Null);
    assert_eq!(ok("var(@a) var(@b) eq(a, b)"), V::Bool(true));
    assert_eq!(ok("eq(1, 1.0)"), V::Null);
}

#[test]
fn relations_return_the_left_operand() {
    assert_eq!(ok("mt(5, 3)"), V::Int(5));
    assert_eq!(ok("lt(5, 3)"), V::Null);
    assert_eq!(ok("lte(3, 3)"), V::Int(3));
    assert_eq!(ok(r#"mte("b", "a")"#), V::string("b"));
    assert_eq!(ok("not(lt(5, 3))"), V::Bool(true));
}

// ============================================================================
// Control Flow
// ============================================================================

#[test]
fn if_evaluates_only_the_taken_branch() {
    let source = "var(@hits, 0) var(@r, if(1, { 1 }, { set(@hits, 1) 2 })) list(r, hits)";
    assert_eq!(ok(source), ints(&[1, 0]));
    assert_eq!(ok("if(not(1), { 1 })"), V::Null);
    assert_eq!(ok("if(not(1), { 1 }, { 2 })"), V::Int(2));
}

#[test]
fn all_stops_at_the_first_null() {
    let source = "var(@a) var(@hits, 0) var(@r, all(@a, { set(@hits, 1) })) list(r, hits)";
    assert_eq!(ok(source), V::list(vec![V::Null, V::Int(0)]));
}

#[test]
fn any_returns_the_first_truthy_argument() {
    let source = "var(@a, 1) var(@hits, 0) var(@r, any(@a, { set(@hits, 1) })) list(r, hits)";
    assert_eq!(ok(source), V::list(vec![V::string("a"), V::Int(0)]));
}

#[test]
fn function_binds_parameters() {
    let define = "var(@inc, function({ add(x, 1) }, @x))";
    assert_eq!(ok(&format!("{define} inc(5)")), V::Int(6));
    assert!(matches!(
        kind(&format!("{define} inc()")),
        EvalErrorKind::InvalidOperands { .. }
    ));
    assert_eq!(
        kind(&format!("{define} inc(1, 2)")),
        EvalErrorKind::TooManyArguments {
            declared: 1,
            got: 2
        }
    );
}

#[test]
fn functions_see_the_callers_bindings() {
    let source = "var(@base, 10) var(@f, function({ add(base, x) }, @x)) f(1)";
    assert_eq!(ok(source), V::Int(11));
}

#[test]
fn parameters_do_not_leak() {
    let source = "var(@f, function({ x }, @x)) f(1) x";
    assert_eq!(kind(source), EvalErrorKind::UndefinedSymbol { name: "x".into() });
}

#[test]
fn deep_recursion() {
    let source = r#"
        var(@down, function({
            if(mt(n, 0), { down(subtract(n, 1)) }, { "done" })
        }, @n))
        down(20000)
    "#;
    assert_eq!(ok(source), V::string("done"));
}

#[test]
fn recursive_factorial() {
    let source = "
        var(@fact, function({
            if(lte(n, 1), { 1 }, { multiply(n, fact(subtract(n, 1))) })
        }, @n))
        fact(10)
    ";
    assert_eq!(ok(source), V::Int(3_628_800));
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn each_leaves_the_loop_name_undeclared() {
    let runtime = Runtime::<()>::new();
    let program = runtime
        .compile("var(@acc, 0) each(@i, list(1, 2, 3), { set(@acc, add(acc, i)) }) acc")
        .unwrap();
    let mut binder = runtime.binder();
    assert_eq!(program.run_in(&(), &mut binder).unwrap(), V::Int(6));
    assert!(!binder.is_declared("i"));
    assert_eq!(binder.depth(), 1);
}

#[test]
fn slicing() {
    assert_eq!(ok("slice(list(1, 2, 3, 4), 1, 3)"), ints(&[2, 3]));
    assert_eq!(ok("slice(list(1, 2, 3, 4), 2)"), ints(&[3, 4]));
    assert_eq!(
        kind("slice(list(1, 2, 3, 4), 2, 2)"),
        EvalErrorKind::InvalidRange { start: 2, end: 2 }
    );
}

#[test]
fn lists_are_shared_and_mutable() {
    let source = "var(@l, list()) var(@m, l) add(l, 1, 2) list(count(m), get(m, 1))";
    assert_eq!(ok(source), ints(&[2, 2]));
}

#[test]
fn self_containing_lists_print_and_compare() {
    assert_eq!(
        ok("var(@l, list(1)) add(l, l) string(l)"),
        V::string("[1, [...]]")
    );
    let source = "var(@a, list(1)) add(a, a) var(@b, list(1)) add(b, b) eq(a, b)";
    assert_eq!(ok(source), V::Bool(true));
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn text_keywords() {
    assert_eq!(ok(r#"replace("hello world", "o", "0")"#), V::string("hell0 w0rld"));
    assert_eq!(ok(r#"length("héllo")"#), V::Int(5));
    assert_eq!(ok(r#"substr("hello", 1, 3)"#), V::string("ell"));
    assert_eq!(ok(r#"number("5.5")"#), V::Float(5.5));
    assert_eq!(ok(r#"add(number("40"), 2)"#), V::Int(42));
    assert_eq!(ok("string(57)"), V::string("57"));
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn eval_runs_a_nested_program() {
    assert_eq!(ok(r#"eval("add(1,2)")"#), V::Int(3));
    assert_eq!(ok(r#"eval("eval('add(2, 3)')")"#), V::Int(5));
}

#[test]
fn eval_is_isolated_both_ways() {
    let err = run(r#"var(@x, 1) eval("x")"#).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UndefinedSymbol { name: "x".into() });
    assert!(err.message.starts_with("eval: "), "{}", err.message);

    let err = run(r#"eval("var(@y, 1)") y"#).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UndefinedSymbol { name: "y".into() });
    assert!(!err.message.starts_with("eval: "));
}

#[test]
fn eval_compile_errors_propagate() {
    let err = run(r#"eval("add(1")"#).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Compile { .. }));
    assert!(err.message.starts_with("eval: expected"), "{}", err.message);
}

// ============================================================================
// Runtime
// ============================================================================

#[test]
fn each_run_starts_fresh() {
    let runtime = Runtime::<()>::new();
    let program = runtime.compile("var(@x, 1) x").unwrap();
    assert_eq!(program.run(&()).unwrap(), V::Int(1));
    assert_eq!(program.run(&()).unwrap(), V::Int(1));
}

#[test]
fn host_bindings() {
    let double = Function::new(|_: &(), _: &mut Binder<()>, args: &Arguments<()>| {
        Ok(Value::Int(args.get_as::<i64>(0)? * 2))
    });
    let runtime = Runtime::builder()
        .bind("double", double)
        .bind_value("answer", 21_i64)
        .build();
    assert_eq!(runtime.run(&(), "double(answer)").unwrap(), V::Int(42));
}

#[test]
fn host_functions_receive_the_context() {
    let greeting = Function::new(|ctx: &String, _: &mut Binder<String>, _: &Arguments<String>| {
        Ok(Value::string(ctx))
    });
    let runtime = Runtime::builder().bind("greeting", greeting).build();
    let ctx = "hello".to_string();
    assert_eq!(runtime.run(&ctx, "greeting()").unwrap(), Value::string("hello"));
    assert_eq!(
        runtime.run(&ctx, r#"eval("greeting()")"#).unwrap(),
        Value::string("hello")
    );
}

#[test]
fn compile_errors_carry_spans() {
    let err = Runtime::<()>::new().compile("list(1 2)").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Compile { .. }));
    assert!(err.message.contains("at 7..8"), "{}", err.message);
}

proptest! {
    #[test]
    fn source_arithmetic_matches_rust(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assert_eq!(ok(&format!("add({a}, {b})")), V::Int(a + b));
        prop_assert_eq!(ok(&format!("multiply({a}, {b})")), V::Int(a * b));
    }

    #[test]
    fn declared_names_round_trip(name in "[a-z_][a-z0-9_]{0,12}", n in any::<i64>()) {
        let source = format!("var(@{name}, {n}) {name}");
        prop_assert_eq!(ok(&source), V::Int(n));
    }
}
