//! Function call evaluation for the Interpreter.

use smallvec::SmallVec;
use virt_ir::Expr;

use super::Interpreter;
use crate::control::finish_frame;
use crate::errors::{not_callable, stack_overflow};
use crate::exec::call::bind_parameters;
use crate::{EvalError, EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    /// `callee(args...)`: the callee first, then the arguments left to right.
    pub(super) fn eval_call_expr(&mut self, callee: &Expr, args: &[Expr]) -> EvalResult {
        let func = self.eval_expr(callee)?;
        if !matches!(func, Value::Function(_) | Value::Native(_)) {
            return Err(not_callable(func.type_name()).with_span(callee.span).into());
        }
        let args = args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<SmallVec<[Value; 4]>, _>>()?;
        Ok(self.eval_call(&func, &args)?)
    }

    /// Call a function value with already-evaluated arguments.
    ///
    /// A `return` inside the body ends the call with its value; otherwise
    /// the call yields the body's last statement value.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_call(&mut self, func: &Value, args: &[Value]) -> Result<Value, EvalError> {
        match func {
            Value::Function(f) => self.call_function(f, args),
            Value::Native(native) => {
                tracing::trace!(name = native.name, args = args.len(), "native call");
                native.call(args)
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    fn call_function(&mut self, f: &FunctionValue, args: &[Value]) -> Result<Value, EvalError> {
        self.check_call_depth()?;
        let frame = bind_parameters(f, args);
        tracing::debug!(
            params = f.params().len(),
            args = args.len(),
            depth = self.call_depth,
            "entering call frame"
        );

        self.call_depth += 1;
        let result = self.with_env(frame, |scoped| scoped.eval_body(f.body()));
        self.call_depth -= 1;

        finish_frame(result)
    }

    fn check_call_depth(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            tracing::warn!(limit = self.max_call_depth, "call depth limit reached");
            return Err(stack_overflow(self.max_call_depth));
        }
        Ok(())
    }
}
