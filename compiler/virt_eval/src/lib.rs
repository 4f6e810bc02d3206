//! Virt Eval - tree-walking evaluator for the Virt scripting language.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values. Objects are shared references; arrays are
//!   copy-on-write values that nested writes store back explicitly.
//! - [`Environment`]: reference-counted lexical scopes linked to a parent.
//! - [`ControlAction`]: errors and `return`/`break`/`continue`, carried on
//!   the `Err` side of [`EvalResult`].
//! - [`Interpreter`]: dispatch over the syntax tree from `virt_ir`.
//!
//! ```text
//! let interner = StringInterner::new();
//! let program = virt_parse::parse("1 + 2", &interner)?;
//! let env = Environment::global(&interner);
//! let value = virt_eval::evaluate(&program, &env, &interner)?;
//! ```

mod control;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod value;

pub use control::{finish_frame, to_loop_action, ControlAction, EvalResult, LoopAction};
pub use environment::{AssignError, Environment, Mutability, WeakEnvironment};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH};
pub use value::{format_number, FunctionValue, Heap, NativeFn, NativeFunction, ObjectRef, Value};

use virt_ir::{Program, StringInterner};

/// Evaluate `program` with `env` as its top-level scope.
///
/// Uses a fresh interpreter with default limits. Bindings the program
/// declares at top level land in `env`.
pub fn evaluate(
    program: &Program,
    env: &Environment,
    interner: &StringInterner,
) -> Result<Value, EvalError> {
    Interpreter::new(interner).evaluate(program, env)
}

#[cfg(test)]
mod tests;
