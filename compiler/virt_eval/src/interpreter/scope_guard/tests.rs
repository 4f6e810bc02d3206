use pretty_assertions::assert_eq;
use virt_ir::StringInterner;

use crate::{Environment, Interpreter, Mutability, Value};

#[test]
fn scoped_restores_environment() {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let outer = interpreter.env.clone();
    let x = interner.intern("x");

    {
        let scoped = interpreter.scoped();
        assert!(scoped.env.parent().is_some_and(|p| p.ptr_eq(&outer)));
        scoped.env.define(x, Value::Number(1.0), Mutability::Mutable);
    }

    assert!(interpreter.env.ptr_eq(&outer));
    assert_eq!(interpreter.env.lookup(x), None);
}

#[test]
fn with_env_switches_and_restores() {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let outer = interpreter.env.clone();
    let other = Environment::new();

    let depth = interpreter.with_env(other.clone(), |scoped| {
        assert!(scoped.env.ptr_eq(&other));
        scoped.env.depth()
    });

    assert_eq!(depth, 1);
    assert!(interpreter.env.ptr_eq(&outer));
}

#[test]
fn nested_scopes_unwind_in_order() {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let base_depth = interpreter.env.depth();

    interpreter.with_env_scope(|outer| {
        assert_eq!(outer.env.depth(), base_depth + 1);
        outer.with_env_scope(|inner| {
            assert_eq!(inner.env.depth(), base_depth + 2);
        });
        assert_eq!(outer.env.depth(), base_depth + 1);
    });

    assert_eq!(interpreter.env.depth(), base_depth);
}

#[test]
fn environment_restored_after_panic() {
    let interner = StringInterner::new();
    let mut interpreter = Interpreter::new(&interner);
    let outer = interpreter.env.clone();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        interpreter.with_env_scope(|_| panic!("boom"));
    }));

    assert!(result.is_err());
    assert!(interpreter.env.ptr_eq(&outer));
}
