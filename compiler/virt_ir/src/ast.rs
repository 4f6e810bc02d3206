//! Syntax tree consumed by the evaluator.
//!
//! Statements and expressions are boxed trees. Function bodies sit behind
//! `Rc` so every closure created from the same literal shares one body.

use std::fmt;
use std::rc::Rc;

use crate::{Name, Span};

/// A parsed source file.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// Expression evaluated for its value.
    Expr(Expr),
    /// `let name = value` / `const name = value`
    VarDecl {
        name: Name,
        value: Option<Expr>,
        kind: BindingKind,
    },
    /// `fn name(params) { body }`
    FnDecl(Rc<FunctionDef>),
    If(IfStmt),
    /// `while (condition) { body }`
    While { condition: Expr, body: Vec<Stmt> },
    TryCatch(TryCatch),
    /// `return` with optional value.
    Return(Option<Expr>),
    Break,
    Continue,
}

/// Whether a declaration may be reassigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Let,
    Const,
}

/// `if (cond) { .. } else if (cond) { .. } else { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_ifs: Vec<ElseIf>,
    pub else_body: Option<Vec<Stmt>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElseIf {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `try { .. } catch name { .. }`
#[derive(Clone, Debug, PartialEq)]
pub struct TryCatch {
    pub try_body: Vec<Stmt>,
    pub catch_var: Name,
    pub catch_body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Str(Name),
    Ident(Name),
    Object(ObjectLiteral),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `target = value`, where target is an identifier or member expression.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: MemberProperty,
    },
    Function(Rc<FunctionDef>),
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

/// Object and array literals.
///
/// Array literals are object literals with `Sequence` shape whose keys are
/// the decimal indices `"0"`, `"1"`, ... in order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
    pub shape: LiteralShape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiteralShape {
    /// `{ key: value }`
    Record,
    /// `[a, b, c]`
    Sequence,
}

/// A single `key: value` entry; `value` is `None` for shorthand `{ key }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: Name,
    pub value: Option<Expr>,
    pub span: Span,
}

/// Right side of a member expression.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberProperty {
    /// `obj.name`
    Named(Name),
    /// `obj[expr]`
    Computed(Box<Expr>),
}

impl MemberProperty {
    pub fn is_computed(&self) -> bool {
        matches!(self, MemberProperty::Computed(_))
    }
}

/// A function literal or declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    /// `Some` for `fn name(..) {}` declarations.
    pub name: Option<Name>,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }

    /// `true` for operators that produce a Boolean.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
