use pretty_assertions::assert_eq;

use super::{eval, eval_err, num};
use crate::{EvalErrorKind, Value};

#[test]
fn number_literals() {
    assert_eq!(eval("42"), num(42.0));
    assert_eq!(eval("3.25"), num(3.25));
}

#[test]
fn basic_operators() {
    assert_eq!(eval("1 + 2"), num(3.0));
    assert_eq!(eval("10 - 4"), num(6.0));
    assert_eq!(eval("6 * 7"), num(42.0));
    assert_eq!(eval("7 / 2"), num(3.5));
    assert_eq!(eval("10 % 3"), num(1.0));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("3 * (7 + 1) + 2"), num(26.0));
    assert_eq!(eval("2 + 3 * 4"), num(14.0));
    assert_eq!(eval("(2 + 3) * 4"), num(20.0));
    assert_eq!(eval("10 - 4 - 3"), num(3.0));
    assert_eq!(eval("100 / 10 / 5"), num(2.0));
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(eval("1 / 0"), num(f64::INFINITY));
    assert!(matches!(eval("5 % 0"), Value::Number(n) if n.is_nan()));
}

#[test]
fn comparisons() {
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("2 < 1"), Value::Bool(false));
    assert_eq!(eval("3 > 2"), Value::Bool(true));
    assert_eq!(eval("3 >= 4"), Value::Bool(false));
    assert_eq!(eval("1 + 1 == 2"), Value::Bool(true));
    assert_eq!(eval("1 != 1"), Value::Bool(false));
}

#[test]
fn equality_across_types_is_false() {
    assert_eq!(eval("1 == '1'"), Value::Bool(false));
    assert_eq!(eval("nil == false"), Value::Bool(false));
    assert_eq!(eval("nil != 0"), Value::Bool(true));
    assert_eq!(eval("'a' == 'a'"), Value::Bool(true));
}

#[test]
fn composite_equality() {
    assert_eq!(eval("[1, 2] == [1, 2]"), Value::Bool(true));
    assert_eq!(eval("{a: 1} == {a: 1}"), Value::Bool(false));
    assert_eq!(eval("let o = {a: 1}\no == o"), Value::Bool(true));
}

#[test]
fn arithmetic_requires_numbers() {
    assert_eq!(
        eval_err("'a' + 1"),
        EvalErrorKind::TypeMismatch {
            expected: "number",
            found: "string",
        }
    );
    assert_eq!(
        eval_err("1 < nil"),
        EvalErrorKind::TypeMismatch {
            expected: "number",
            found: "nil",
        }
    );
}

#[test]
fn operands_evaluate_left_to_right() {
    let source = "
        let trace = {calls: 0}
        fn left() { trace.calls = trace.calls * 10 + 1\n 1 }
        fn right() { trace.calls = trace.calls * 10 + 2\n 2 }
        left() + right()
        trace.calls
    ";
    assert_eq!(eval(source), num(12.0));
}

#[test]
fn failing_left_operand_skips_right() {
    let source = "
        let trace = {right: false}
        fn right() { trace.right = true\n 1 }
        try { missing + right() } catch e { nil }
        trace.right
    ";
    assert_eq!(eval(source), Value::Bool(false));
}
