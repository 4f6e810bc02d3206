//! Callable values: user closures and host functions.

use std::fmt;
use std::rc::Rc;

use virt_ir::{FunctionDef, Name, Stmt};

use super::Value;
use crate::{Environment, EvalError};

/// A closure: a function literal paired with the environment it was
/// evaluated in.
#[derive(Clone)]
pub struct FunctionValue {
    def: Rc<FunctionDef>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(def: Rc<FunctionDef>, env: Environment) -> Self {
        FunctionValue { def, env }
    }

    /// Declared name, `None` for anonymous literals.
    pub fn name(&self) -> Option<Name> {
        self.def.name
    }

    pub fn params(&self) -> &[Name] {
        &self.def.params
    }

    pub fn body(&self) -> &[Stmt] {
        &self.def.body
    }

    /// Environment captured when the literal was evaluated.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Same literal evaluated in the same environment.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.def, &other.def) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.def.name)
            .field("params", &self.def.params.len())
            .finish_non_exhaustive()
    }
}

/// Signature of host functions callable from scripts.
pub type NativeFn = fn(&[Value]) -> Result<Value, EvalError>;

/// A host function exposed to scripts under `name`.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}
