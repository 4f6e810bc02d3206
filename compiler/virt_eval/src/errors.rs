//! Runtime errors and the factory functions that build them.
//!
//! Factories are `#[cold]`: they only run on the failure path.

use std::fmt;

use virt_ir::{BinaryOp, Span};

use crate::Value;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("cannot resolve variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot access property of non-object (attempted to access properties of {type_name})")]
    NotAnObject { type_name: &'static str },

    #[error("cannot invoke a non-function (attempted to call a {type_name})")]
    NotCallable { type_name: &'static str },

    #[error("index out of bounds: {index}")]
    IndexOutOfBounds { index: String },

    #[error("invalid property key of type {type_name}")]
    InvalidKey { type_name: &'static str },

    #[error("cannot assign to constant `{name}`")]
    ImmutableBinding { name: String },

    #[error("maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize },

    #[error("`{keyword}` used outside of a loop")]
    ControlOutsideLoop { keyword: &'static str },

    #[error("{0}")]
    Custom(String),
}

/// A runtime error with its message and, once known, its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered message; this is the string `catch` binds.
    pub message: String,
    pub span: Option<Span>,
}

impl EvalError {
    /// Free-form error, for host functions.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom(message.clone()),
            message,
            span: None,
        }
    }

    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            message: kind.to_string(),
            kind,
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span_if_missing(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, found })
}

/// A numeric operator applied to a non-number. The kind names the first
/// offending operand; the message names the operator and both types.
#[cold]
pub fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    let found = match left {
        Value::Number(_) => right.type_name(),
        _ => left.type_name(),
    };
    EvalError {
        kind: EvalErrorKind::TypeMismatch {
            expected: "number",
            found,
        },
        message: format!(
            "operator `{op}` cannot be applied to {} and {}",
            left.type_name(),
            right.type_name()
        ),
        span: None,
    }
}

#[cold]
pub fn not_an_object(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnObject { type_name })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn index_out_of_bounds(index: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        index: crate::format_number(index),
    })
}

#[cold]
pub fn invalid_key(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidKey { type_name })
}

#[cold]
pub fn immutable_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    })
}

/// The parser rejects these; reachable only from hand-built syntax trees.
#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::new("invalid assignment target")
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

#[cold]
pub fn control_outside_loop(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlOutsideLoop { keyword })
}
