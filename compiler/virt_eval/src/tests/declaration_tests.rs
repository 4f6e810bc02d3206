use pretty_assertions::assert_eq;

use super::{eval, eval_err, num, string};
use crate::{EvalErrorKind, Value};

#[test]
fn stale_bindings_keep_old_value() {
    assert_eq!(eval("let x = 10\nlet y = x\nx = 20\ny"), num(10.0));
    assert_eq!(eval("let x = 10\nlet y = x\nx = 20\nx"), num(20.0));
}

#[test]
fn declaration_yields_its_value() {
    assert_eq!(eval("let x = 'hello'"), string("hello"));
    assert_eq!(eval("let x"), Value::Nil);
}

#[test]
fn assignment_yields_assigned_value() {
    assert_eq!(eval("let x = 1\nx = 5"), num(5.0));
    assert_eq!(eval("let a = 0\nlet b = 0\na = b = 3\na + b"), num(6.0));
}

#[test]
fn undefined_variable() {
    assert_eq!(
        eval_err("missing"),
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn assignment_never_creates_globals() {
    assert_eq!(
        eval_err("x = 1"),
        EvalErrorKind::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn block_scopes_shadow() {
    let source = "
        let x = 1
        if true { let x = 2 }
        x
    ";
    assert_eq!(eval(source), num(1.0));
}

#[test]
fn blocks_assign_outer_bindings() {
    let source = "
        let x = 1
        if true { x = 2 }
        x
    ";
    assert_eq!(eval(source), num(2.0));
}

#[test]
fn block_bindings_do_not_leak() {
    assert_eq!(
        eval_err("if true { let inner = 1 }\ninner"),
        EvalErrorKind::UndefinedVariable {
            name: "inner".to_string()
        }
    );
}

#[test]
fn let_redeclaration_replaces() {
    assert_eq!(eval("let x = 1\nlet x = 'two'\nx"), string("two"));
}

#[test]
fn constants_cannot_be_reassigned() {
    assert_eq!(
        eval_err("const limit = 3\nlimit = 4"),
        EvalErrorKind::ImmutableBinding {
            name: "limit".to_string()
        }
    );
    assert_eq!(
        eval_err("const limit = 3\nlet limit = 4"),
        EvalErrorKind::ImmutableBinding {
            name: "limit".to_string()
        }
    );
}

#[test]
fn constant_objects_stay_mutable_inside() {
    assert_eq!(eval("const o = {n: 1}\no.n = 2\no.n"), num(2.0));
}

#[test]
fn constant_arrays_are_values() {
    assert_eq!(
        eval_err("const a = [1]\na[0] = 2"),
        EvalErrorKind::ImmutableBinding {
            name: "a".to_string()
        }
    );
}

#[test]
fn globals_are_constants() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("nil"), Value::Nil);
    assert_eq!(
        eval_err("true = false"),
        EvalErrorKind::ImmutableBinding {
            name: "true".to_string()
        }
    );
    // Shadowing in an inner scope is still allowed.
    assert_eq!(eval("if true { let nil = 1\nnil }"), num(1.0));
}

#[test]
fn strings() {
    assert_eq!(eval("'single'"), string("single"));
    assert_eq!(eval("\"double\""), string("double"));
}
