//! `InterpreterBuilder` for configuring an [`Interpreter`].

use virt_ir::StringInterner;

use super::Interpreter;
use crate::Environment;

/// Call depth at which user-function recursion fails with a stack
/// overflow error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

/// Builder for [`Interpreter`] instances.
///
/// ```text
/// let interpreter = InterpreterBuilder::new(&interner)
///     .env(globals)
///     .max_call_depth(64)
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    env: Option<Environment>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set the initial environment.
    ///
    /// Defaults to [`Environment::global`].
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the maximum depth of nested user-function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let interner = self.interner;
        Interpreter {
            interner,
            env: self.env.unwrap_or_else(|| Environment::global(interner)),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
