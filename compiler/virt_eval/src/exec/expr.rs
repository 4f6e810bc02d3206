//! Expression evaluation helpers.

use virt_ir::{BinaryOp, Name, StringInterner};

use crate::errors::{invalid_operands, type_mismatch};
use crate::{Environment, EvalError, EvalResult, Value};

/// Look up an identifier through the environment chain.
pub fn eval_ident(name: Name, env: &Environment, interner: &StringInterner) -> EvalResult {
    Ok(env.get(name, interner)?)
}

/// Apply a binary operator to already-evaluated operands.
///
/// `==` and `!=` accept any operands. Everything else needs two numbers;
/// division by zero follows IEEE 754.
pub fn eval_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.equals(right))),
        BinaryOp::Add => numeric(left, right, op, |a, b| Value::Number(a + b)),
        BinaryOp::Sub => numeric(left, right, op, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, op, |a, b| Value::Number(a * b)),
        BinaryOp::Div => numeric(left, right, op, |a, b| Value::Number(a / b)),
        BinaryOp::Mod => numeric(left, right, op, |a, b| Value::Number(a % b)),
        BinaryOp::Lt => numeric(left, right, op, |a, b| Value::Bool(a < b)),
        BinaryOp::LtEq => numeric(left, right, op, |a, b| Value::Bool(a <= b)),
        BinaryOp::Gt => numeric(left, right, op, |a, b| Value::Bool(a > b)),
        BinaryOp::GtEq => numeric(left, right, op, |a, b| Value::Bool(a >= b)),
    }
}

#[inline]
fn numeric(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    apply: impl FnOnce(f64, f64) -> Value,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(apply(*a, *b)),
        _ => Err(invalid_operands(op, left, right)),
    }
}

/// Conditions of `if` and `while` must be booleans.
pub fn expect_bool(value: &Value) -> Result<bool, EvalError> {
    value
        .as_bool()
        .ok_or_else(|| type_mismatch("boolean", value.type_name()))
}
