//! Evaluation helpers the `Interpreter` delegates to.
//!
//! - `expr`: identifiers, operators, conditions
//! - `member`: property reads and the write-back rules for nested writes
//! - `call`: call-frame setup

pub mod call;
pub mod expr;
pub mod member;
