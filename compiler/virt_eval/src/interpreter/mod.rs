//! Tree-walking interpreter for Virt.
//!
//! # Architecture
//!
//! Every statement and expression evaluates to an [`EvalResult`]: a value,
//! or a [`ControlAction`] (runtime error, `return`, `break`, `continue`)
//! that `?` carries outward until something consumes it. Loops consume
//! `break`/`continue`, calls consume `return`, `try`/`catch` consumes
//! errors. Helper modules in `crate::exec` hold the pieces that do not need
//! the interpreter itself:
//!
//! - `exec::expr`: identifiers, binary operators, conditions
//! - `exec::member`: property reads and nested write-back
//! - `exec::call`: call-frame construction
//!
//! # Scopes
//!
//! The interpreter holds the current [`Environment`]. Blocks and calls swap
//! in a new one through [`ScopedInterpreter`], which puts the previous
//! environment back when dropped.

mod builder;
mod function_call;
mod scope_guard;
mod try_catch;

use std::rc::Rc;

use smallvec::SmallVec;
use virt_ir::{
    Expr, ExprKind, IfStmt, LiteralShape, MemberProperty, Name, ObjectLiteral, Program, Property,
    Stmt, StmtKind, StringInterner,
};
use virt_stack::ensure_sufficient_stack;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

use crate::control::{finish_frame, to_loop_action, LoopAction};
use crate::environment::AssignError;
use crate::errors::invalid_assignment_target;
use crate::exec::expr::{eval_binary, eval_ident, expect_bool};
use crate::exec::member::{read_member, write_path};
use crate::{ControlAction, Environment, EvalError, EvalResult, Mutability, Value};

/// Evaluates Virt programs.
///
/// One interpreter runs one evaluation at a time; it is not `Send`.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    /// Scope new bindings go into.
    pub env: Environment,
    call_depth: usize,
    max_call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with a fresh global environment and default limits.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate `program` with `env` as its top-level scope.
    ///
    /// Yields the value of the last statement, or the value of a top-level
    /// `return`. The interpreter's own environment is restored afterwards.
    pub fn evaluate(&mut self, program: &Program, env: &Environment) -> Result<Value, EvalError> {
        let result = self.with_env(env.clone(), |scoped| scoped.eval_program(program));
        finish_frame(result)
    }

    /// Evaluate `program` in the interpreter's current environment.
    ///
    /// Top-level bindings persist across calls, so a host can feed a
    /// session one program at a time.
    pub fn run(&mut self, program: &Program) -> Result<Value, EvalError> {
        finish_frame(self.eval_program(program))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(statements = program.body.len()))]
    fn eval_program(&mut self, program: &Program) -> EvalResult {
        self.eval_body(&program.body)
    }

    /// Evaluate statements in the current scope; the last value wins.
    pub(crate) fn eval_body(&mut self, body: &[Stmt]) -> EvalResult {
        let mut last = Value::Nil;
        for stmt in body {
            last = self.eval_stmt(stmt)?;
        }
        Ok(last)
    }

    /// Evaluate statements in a fresh child scope.
    fn eval_block(&mut self, body: &[Stmt]) -> EvalResult {
        self.with_env_scope(|scoped| scoped.eval_body(body))
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult {
        self.eval_stmt_inner(stmt)
            .map_err(|action| action.with_span_if_error(stmt.span))
    }

    fn eval_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult {
        match &stmt.kind {
            StmtKind::Expr(expr) => self.eval_expr(expr),
            StmtKind::VarDecl { name, value, kind } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                Ok(self.declare(*name, value, (*kind).into())?)
            }
            StmtKind::FnDecl(def) => {
                let func = Value::function(Rc::clone(def), self.env.clone());
                match def.name {
                    Some(name) => Ok(self.declare(name, func, Mutability::Mutable)?),
                    None => Ok(func),
                }
            }
            StmtKind::If(if_stmt) => self.eval_if(if_stmt),
            StmtKind::While { condition, body } => self.eval_while(condition, body),
            StmtKind::TryCatch(try_catch) => self.eval_try_catch(try_catch),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                Err(ControlAction::Return(value))
            }
            StmtKind::Break => Err(ControlAction::Break),
            StmtKind::Continue => Err(ControlAction::Continue),
        }
    }

    fn eval_if(&mut self, stmt: &IfStmt) -> EvalResult {
        if self.eval_condition(&stmt.condition)? {
            return self.eval_block(&stmt.then_body);
        }
        for branch in &stmt.else_ifs {
            if self.eval_condition(&branch.condition)? {
                return self.eval_block(&branch.body);
            }
        }
        match &stmt.else_body {
            Some(body) => self.eval_block(body),
            None => Ok(Value::Nil),
        }
    }

    fn eval_while(&mut self, condition: &Expr, body: &[Stmt]) -> EvalResult {
        while self.eval_condition(condition)? {
            match to_loop_action(self.eval_block(body)) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Propagate(action) => return Err(action),
            }
        }
        Ok(Value::Nil)
    }

    fn eval_condition(&mut self, condition: &Expr) -> Result<bool, ControlAction> {
        let value = self.eval_expr(condition)?;
        expect_bool(&value).map_err(|err| err.with_span_if_missing(condition.span).into())
    }

    /// Evaluate an expression, growing the native stack if needed.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|action| action.with_span_if_error(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(*name))),
            ExprKind::Ident(name) => eval_ident(*name, &self.env, self.interner),
            ExprKind::Object(literal) => self.eval_object_literal(literal),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(eval_binary(&left, &right, *op)?)
            }
            ExprKind::Assign { target, value } => self.eval_assign(target, value),
            ExprKind::Member { object, property } => {
                let base = self.eval_expr(object)?;
                let key = self.eval_member_key(property)?;
                Ok(read_member(&base, &key)?)
            }
            ExprKind::Function(def) => Ok(Value::function(Rc::clone(def), self.env.clone())),
            ExprKind::Call { callee, args } => self.eval_call_expr(callee, args),
        }
    }

    /// Object and array literals. Properties evaluate left to right in the
    /// current scope.
    fn eval_object_literal(&mut self, literal: &ObjectLiteral) -> EvalResult {
        match literal.shape {
            LiteralShape::Sequence => {
                let items = literal
                    .properties
                    .iter()
                    .map(|property| self.eval_property(property))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }
            LiteralShape::Record => {
                let mut map = rustc_hash::FxHashMap::default();
                map.reserve(literal.properties.len());
                for property in &literal.properties {
                    let value = self.eval_property(property)?;
                    map.insert(self.interner.lookup(property.key).to_string(), value);
                }
                Ok(Value::object(map))
            }
        }
    }

    /// `key: value`, or shorthand `key` which reads the variable `key`.
    fn eval_property(&mut self, property: &Property) -> EvalResult {
        match &property.value {
            Some(value) => self.eval_expr(value),
            None => eval_ident(property.key, &self.env, self.interner)
                .map_err(|action| action.with_span_if_error(property.span)),
        }
    }

    fn eval_member_key(&mut self, property: &MemberProperty) -> EvalResult {
        match property {
            MemberProperty::Named(name) => Ok(Value::string(self.interner.lookup(*name))),
            MemberProperty::Computed(key) => self.eval_expr(key),
        }
    }

    /// `target = value`. The assignment evaluates to the assigned value.
    fn eval_assign(&mut self, target: &Expr, value: &Expr) -> EvalResult {
        match &target.kind {
            ExprKind::Ident(name) => {
                let value = self.eval_expr(value)?;
                Ok(self.assign(*name, value)?)
            }
            ExprKind::Member { .. } => self.eval_member_assign(target, value),
            _ => Err(invalid_assignment_target().into()),
        }
    }

    /// `root.k1[k2]...kn = value`.
    ///
    /// Evaluates the root, then the keys left to right, then the value, and
    /// writes through the whole path. Objects on the path are updated in
    /// place. Arrays are values: when the root is a variable the write goes
    /// into the variable's own array; a temporary root is discarded.
    fn eval_member_assign(&mut self, target: &Expr, value: &Expr) -> EvalResult {
        let mut properties: SmallVec<[&MemberProperty; 4]> = SmallVec::new();
        let mut root = target;
        while let ExprKind::Member { object, property } = &root.kind {
            properties.push(property);
            root = object;
        }
        properties.reverse();

        let mut base = self.eval_expr(root)?;
        let mut path: SmallVec<[Value; 4]> = SmallVec::with_capacity(properties.len());
        for property in properties {
            path.push(self.eval_member_key(property)?);
        }
        let value = self.eval_expr(value)?;

        if let ExprKind::Ident(name) = &root.kind {
            // The binding must be the only holder of an array it writes to.
            drop(base);
            self.write_variable(*name, &path, value.clone())?;
        } else {
            write_path(&mut base, &path, value.clone())?;
        }
        Ok(value)
    }

    /// Write through the binding of `name` without copying it out. Writing
    /// into a `const` array counts as reassigning it.
    fn write_variable(&self, name: Name, path: &[Value], value: Value) -> Result<(), EvalError> {
        let written = self.env.update(name, |slot, mutability| {
            if matches!(slot, Value::Array(_)) && !mutability.is_mutable() {
                return Err(AssignError::Immutable);
            }
            Ok(write_path(slot, path, value))
        });
        match written {
            Ok(Ok(written)) => written,
            Ok(Err(err)) | Err(err) => Err(self.binding_error(err, name)),
        }
    }

    fn declare(&self, name: Name, value: Value, mutability: Mutability) -> Result<Value, EvalError> {
        self.env
            .declare(name, value, mutability)
            .map_err(|err| self.binding_error(err, name))
    }

    fn assign(&self, name: Name, value: Value) -> Result<Value, EvalError> {
        self.env.set(name, value, self.interner)
    }

    fn binding_error(&self, err: AssignError, name: Name) -> EvalError {
        err.into_error(self.interner.lookup(name))
    }
}
