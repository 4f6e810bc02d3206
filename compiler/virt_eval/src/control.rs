//! Non-local control flow.
//!
//! Evaluation returns `Result<Value, ControlAction>`: the `Err` side carries
//! either a runtime error or a pending `return`/`break`/`continue`, and `?`
//! propagates all of them until the construct that consumes them.

use crate::errors::control_outside_loop;
use crate::{EvalError, Value};

/// Anything that interrupts normal evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// Runtime error, recoverable only by `try`/`catch`.
    Error(EvalError),
    /// `return`, consumed by the nearest function call.
    Return(Value),
    /// `break`, consumed by the nearest loop.
    Break,
    /// `continue`, consumed by the nearest loop.
    Continue,
}

impl ControlAction {
    /// Attach `span` to an error that has none yet; signals pass through.
    #[must_use]
    pub fn with_span_if_error(self, span: virt_ir::Span) -> Self {
        match self {
            ControlAction::Error(err) => ControlAction::Error(err.with_span_if_missing(span)),
            other => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

/// Result of evaluating an expression or statement.
pub type EvalResult = Result<Value, ControlAction>;

/// What a loop should do after one iteration of its body.
#[derive(Debug)]
pub enum LoopAction {
    /// Check the condition again.
    Continue,
    Break,
    /// Leave the loop and hand the action to the enclosing construct.
    Propagate(ControlAction),
}

/// Classify a loop body's outcome.
pub fn to_loop_action(result: EvalResult) -> LoopAction {
    match result {
        Ok(_) | Err(ControlAction::Continue) => LoopAction::Continue,
        Err(ControlAction::Break) => LoopAction::Break,
        Err(action) => LoopAction::Propagate(action),
    }
}

/// Close a call frame (function body or program): `return` yields its value,
/// loop signals that escaped every loop become errors.
pub fn finish_frame(result: EvalResult) -> Result<Value, EvalError> {
    match result {
        Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
        Err(ControlAction::Error(err)) => Err(err),
        Err(ControlAction::Break) => Err(control_outside_loop("break")),
        Err(ControlAction::Continue) => Err(control_outside_loop("continue")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::undefined_variable;

    #[test]
    fn loop_actions() {
        assert!(matches!(to_loop_action(Ok(Value::Nil)), LoopAction::Continue));
        assert!(matches!(
            to_loop_action(Err(ControlAction::Continue)),
            LoopAction::Continue
        ));
        assert!(matches!(to_loop_action(Err(ControlAction::Break)), LoopAction::Break));
        assert!(matches!(
            to_loop_action(Err(ControlAction::Return(Value::Number(1.0)))),
            LoopAction::Propagate(ControlAction::Return(ref v)) if *v == Value::Number(1.0)
        ));
        assert!(matches!(
            to_loop_action(Err(undefined_variable("x").into())),
            LoopAction::Propagate(ControlAction::Error(_))
        ));
    }

    #[test]
    fn frame_consumes_return_only() {
        assert_eq!(
            finish_frame(Err(ControlAction::Return(Value::string("done")))),
            Ok(Value::string("done"))
        );
        assert_eq!(finish_frame(Ok(Value::Nil)), Ok(Value::Nil));
        assert_eq!(
            finish_frame(Err(ControlAction::Break)),
            Err(control_outside_loop("break"))
        );
        assert_eq!(
            finish_frame(Err(ControlAction::Continue)),
            Err(control_outside_loop("continue"))
        );
    }

    #[test]
    fn span_only_attaches_to_errors() {
        let span = virt_ir::Span::new(1, 2);
        let action = ControlAction::from(undefined_variable("x")).with_span_if_error(span);
        assert!(matches!(action, ControlAction::Error(ref e) if e.span == Some(span)));
        assert_eq!(ControlAction::Break.with_span_if_error(span), ControlAction::Break);
    }
}
