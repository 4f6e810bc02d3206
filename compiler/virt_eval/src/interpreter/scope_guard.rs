//! RAII scope guards for the interpreter's current environment.
//!
//! [`ScopedInterpreter`] swaps a new environment into the interpreter and
//! swaps the previous one back when dropped, including during unwinding.
//! It holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so the
//! guarded interpreter is used exactly like the interpreter itself.
//!
//! ```text
//! interpreter.with_env_scope(|scoped| {
//!     scoped.env.define(name, value, Mutability::Mutable);
//!     scoped.eval_body(body)
//! })
//! ```

use std::mem;
use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// Guard that restores the interpreter's previous environment on drop.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    saved: Environment,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        mem::swap(&mut self.interpreter.env, &mut self.saved);
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Enter a new child scope of the current environment.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        let child = self.env.child();
        self.scoped_in(child)
    }

    /// Make `env` the current environment until the guard drops.
    ///
    /// Used for calls, whose frame hangs off the callee's captured
    /// environment rather than the caller's.
    pub fn scoped_in(&mut self, env: Environment) -> ScopedInterpreter<'_, 'a> {
        let saved = mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            saved,
        }
    }

    /// Run `f` in a new child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` with `env` as the current environment.
    pub fn with_env<T, F>(&mut self, env: Environment, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped_in(env);
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
