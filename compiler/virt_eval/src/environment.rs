//! Lexical environments.
//!
//! An [`Environment`] is a shared handle to one scope. Scopes link to their
//! parent, so closures and nested blocks can share a chain without copying
//! it. A scope lives as long as any handle to it (or to a descendant) is
//! reachable.

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;
use virt_ir::{BindingKind, Name, StringInterner};

use crate::errors::{immutable_binding, undefined_variable};
use crate::{EvalError, Value};

/// Whether a binding may be reassigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

impl From<BindingKind> for Mutability {
    fn from(kind: BindingKind) -> Self {
        match kind {
            BindingKind::Let => Mutability::Mutable,
            BindingKind::Const => Mutability::Immutable,
        }
    }
}

/// A variable binding.
#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// Why a declaration or assignment was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Target binding is `const`.
    Immutable,
    /// No scope in the chain defines the name.
    Undefined,
}

impl AssignError {
    /// Runtime error for this failure on the variable `name`.
    #[cold]
    pub fn into_error(self, name: &str) -> EvalError {
        match self {
            AssignError::Immutable => immutable_binding(name),
            AssignError::Undefined => undefined_variable(name),
        }
    }
}

/// A single scope's bindings plus its parent link.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<Environment>,
    /// Bindings whose value is a closure over this same scope.
    self_captures: usize,
}

/// Shared handle to a scope.
///
/// Cloning the handle does not copy the scope. A closure stored in the
/// scope it captures (`fn f() {}` declares `f` in the scope `f` closes
/// over) forms a cycle; dropping the last handle from outside that cycle
/// clears the scope's bindings so the cycle is freed.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct Environment(Rc<RefCell<Scope>>);

/// Non-owning handle to a scope.
#[derive(Clone)]
pub struct WeakEnvironment(Weak<RefCell<Scope>>);

impl WeakEnvironment {
    /// The scope, if some strong handle still keeps it alive.
    pub fn upgrade(&self) -> Option<Environment> {
        self.0.upgrade().map(Environment)
    }
}

impl Environment {
    /// Root scope with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root scope with the `true`, `false` and `nil` constants.
    pub fn global(interner: &StringInterner) -> Self {
        let env = Self::new();
        for (name, value) in [
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("nil", Value::Nil),
        ] {
            env.define(interner.intern(name), value, Mutability::Immutable);
        }
        env
    }

    /// New scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
            self_captures: 0,
        })))
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakEnvironment {
        WeakEnvironment(Rc::downgrade(&self.0))
    }

    /// Bind `name` in this scope, shadowing any binding in an ancestor.
    ///
    /// Replaces an existing mutable binding in this scope; an existing
    /// immutable one is an error.
    pub fn declare(
        &self,
        name: Name,
        value: Value,
        mutability: Mutability,
    ) -> Result<Value, AssignError> {
        let previous = {
            let mut scope = self.0.borrow_mut();
            if let Some(existing) = scope.bindings.get(&name) {
                if !existing.mutability.is_mutable() {
                    return Err(AssignError::Immutable);
                }
            }
            self.insert(&mut scope, name, value.clone(), mutability)
        };
        drop(previous);
        Ok(value)
    }

    /// Unconditionally bind `name` in this scope. For host setup.
    pub fn define(&self, name: Name, value: Value, mutability: Mutability) {
        let previous = {
            let mut scope = self.0.borrow_mut();
            self.insert(&mut scope, name, value, mutability)
        };
        drop(previous);
    }

    /// Find `name`, walking outward through parents.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(binding) = scope.bindings.get(&name) {
                    return Some(binding.value.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    /// [`lookup`](Self::lookup), reporting a missing name as an
    /// undefined-variable error.
    pub fn get(&self, name: Name, interner: &StringInterner) -> Result<Value, EvalError> {
        self.lookup(name)
            .ok_or_else(|| undefined_variable(interner.lookup(name)))
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding.
    pub fn assign(&self, name: Name, value: Value) -> Result<Value, AssignError> {
        let owner = self.owner_of(name).ok_or(AssignError::Undefined)?;
        let previous = {
            let mut scope = owner.0.borrow_mut();
            let scope = &mut *scope;
            let Some(binding) = scope.bindings.get_mut(&name) else {
                return Err(AssignError::Undefined);
            };
            if !binding.mutability.is_mutable() {
                return Err(AssignError::Immutable);
            }
            let previous = mem::replace(&mut binding.value, value.clone());
            owner.recount(scope, Some(&previous), owner.is_captured_by(&value));
            previous
        };
        drop(previous);
        Ok(value)
    }

    /// [`assign`](Self::assign), reporting failures as runtime errors
    /// naming the variable.
    pub fn set(
        &self,
        name: Name,
        value: Value,
        interner: &StringInterner,
    ) -> Result<Value, EvalError> {
        self.assign(name, value)
            .map_err(|err| err.into_error(interner.lookup(name)))
    }

    /// Run `f` on the nearest binding of `name` in place.
    ///
    /// `f` also receives the binding's mutability; enforcing it is up to
    /// the caller, since writing into a `const` object is allowed.
    pub fn update<R>(
        &self,
        name: Name,
        f: impl FnOnce(&mut Value, Mutability) -> R,
    ) -> Result<R, AssignError> {
        let owner = self.owner_of(name).ok_or(AssignError::Undefined)?;
        let mut scope = owner.0.borrow_mut();
        let scope = &mut *scope;
        let Some(binding) = scope.bindings.get_mut(&name) else {
            return Err(AssignError::Undefined);
        };
        let captured_before = owner.is_captured_by(&binding.value);
        let result = f(&mut binding.value, binding.mutability);
        let captured_after = owner.is_captured_by(&binding.value);
        match (captured_before, captured_after) {
            (true, false) => scope.self_captures -= 1,
            (false, true) => scope.self_captures += 1,
            _ => {}
        }
        Ok(result)
    }

    /// Whether this scope itself (not an ancestor) binds `name`.
    pub fn has_local(&self, name: Name) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// Number of scopes from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Nearest scope in the chain that binds `name`.
    fn owner_of(&self, name: Name) -> Option<Environment> {
        let mut current = self.clone();
        while !current.has_local(name) {
            current = current.parent()?;
        }
        Some(current)
    }

    fn insert(
        &self,
        scope: &mut Scope,
        name: Name,
        value: Value,
        mutability: Mutability,
    ) -> Option<Binding> {
        let captured = self.is_captured_by(&value);
        let previous = scope.bindings.insert(name, Binding { value, mutability });
        self.recount(scope, previous.as_ref().map(|old| &old.value), captured);
        previous
    }

    /// Keep `self_captures` in step with one binding being replaced.
    fn recount(&self, scope: &mut Scope, previous: Option<&Value>, captured: bool) {
        if previous.is_some_and(|old| self.is_captured_by(old)) {
            scope.self_captures -= 1;
        }
        if captured {
            scope.self_captures += 1;
        }
    }

    /// Whether `value` is a closure over this scope.
    fn is_captured_by(&self, value: &Value) -> bool {
        matches!(value, Value::Function(func) if func.env().ptr_eq(self))
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        // Borrowed means a caller up the stack holds another handle.
        let detached = match self.0.try_borrow_mut() {
            Ok(mut scope)
                if scope.self_captures > 0
                    && Rc::strong_count(&self.0) == scope.self_captures + 1 =>
            {
                scope.self_captures = 0;
                Some(mem::take(&mut scope.bindings))
            }
            _ => None,
        };
        drop(detached);
    }
}
