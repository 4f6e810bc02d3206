//! `try`/`catch`: the only construct that recovers from a runtime error.

use virt_ir::TryCatch;

use super::Interpreter;
use crate::{ControlAction, EvalResult, Mutability, Value};

impl Interpreter<'_> {
    /// Run the try body in its own scope. On a runtime error, bind the
    /// error message as a string in a fresh scope and run the catch body
    /// there. `return`, `break` and `continue` pass through untouched.
    pub(super) fn eval_try_catch(&mut self, stmt: &TryCatch) -> EvalResult {
        match self.eval_block(&stmt.try_body) {
            Err(ControlAction::Error(err)) => {
                tracing::debug!(error = %err, "caught runtime error");
                let message = Value::string(err.message);
                self.with_env_scope(|scoped| {
                    scoped
                        .env
                        .define(stmt.catch_var, message, Mutability::Mutable);
                    scoped.eval_body(&stmt.catch_body)
                })
            }
            other => other,
        }
    }
}
