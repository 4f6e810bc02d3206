//! Host functions the CLI makes available to scripts.

use virt_eval::{Environment, EvalError, Mutability, Value};
use virt_ir::StringInterner;

/// `print(args...)`: write the arguments to stdout separated by spaces.
pub fn print(args: &[Value]) -> Result<Value, EvalError> {
    println!("{}", render_args(args));
    Ok(Value::Nil)
}

/// Text `print` writes for `args`.
pub fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(Value::display_value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bind every host function into `env`.
pub fn register(env: &Environment, interner: &StringInterner) {
    env.define(
        interner.intern("print"),
        Value::native("print", print),
        Mutability::Immutable,
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_display_values() {
        let args = [
            Value::string("total:"),
            Value::Number(3.0),
            Value::array(vec![Value::string("a"), Value::Nil]),
        ];
        assert_eq!(render_args(&args), "total: 3 ['a', nil]");
        assert_eq!(render_args(&[]), "");
    }

    #[test]
    fn print_returns_nil() {
        assert_eq!(print(&[]), Ok(Value::Nil));
    }

    #[test]
    fn registered_print_is_constant() {
        let interner = StringInterner::new();
        let env = Environment::global(&interner);
        register(&env, &interner);
        let name = interner.intern("print");
        assert!(matches!(env.lookup(name), Some(Value::Native(_))));
        assert!(env.assign(name, Value::Nil).is_err());
    }
}
