//! Call-frame setup for user functions.

use crate::{Environment, FunctionValue, Mutability, Value};

/// Build the environment a call to `func` runs in.
///
/// The frame is a child of the closure's captured environment. Parameters
/// bind positionally as mutable locals: missing arguments are `nil`, extra
/// arguments are ignored.
pub fn bind_parameters(func: &FunctionValue, args: &[Value]) -> Environment {
    let frame = func.env().child();
    for (i, &param) in func.params().iter().enumerate() {
        let value = args.get(i).cloned().unwrap_or(Value::Nil);
        frame.define(param, value, Mutability::Mutable);
    }
    frame
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use virt_ir::{FunctionDef, Span, StringInterner};

    use super::*;

    fn function(interner: &StringInterner, params: &[&str], env: Environment) -> FunctionValue {
        let def = FunctionDef {
            name: None,
            params: params.iter().map(|p| interner.intern(p)).collect(),
            body: Vec::new(),
            span: Span::DUMMY,
        };
        FunctionValue::new(Rc::new(def), env)
    }

    #[test]
    fn missing_arguments_are_nil() {
        let interner = StringInterner::new();
        let func = function(&interner, &["a", "b"], Environment::new());
        let frame = bind_parameters(&func, &[Value::Number(1.0)]);
        assert_eq!(frame.lookup(interner.intern("a")), Some(Value::Number(1.0)));
        assert_eq!(frame.lookup(interner.intern("b")), Some(Value::Nil));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let interner = StringInterner::new();
        let func = function(&interner, &["a"], Environment::new());
        let frame = bind_parameters(&func, &[Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(frame.lookup(interner.intern("a")), Some(Value::Number(1.0)));
    }

    #[test]
    fn frame_is_child_of_captured_env() {
        let interner = StringInterner::new();
        let captured = Environment::new();
        let outer = interner.intern("outer");
        captured.define(outer, Value::Number(7.0), Mutability::Mutable);

        let func = function(&interner, &["x"], captured.clone());
        let frame = bind_parameters(&func, &[]);
        assert!(frame.parent().is_some_and(|p| p.ptr_eq(&captured)));
        assert_eq!(frame.lookup(outer), Some(Value::Number(7.0)));
        // Parameters never leak into the captured scope.
        assert!(!captured.has_local(interner.intern("x")));
    }
}
