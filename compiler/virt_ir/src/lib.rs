//! Shared intermediate representation for the Virt language.
//!
//! Everything the lexer, parser and evaluator exchange lives here:
//! source spans, interned names, tokens and the syntax tree.

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, BindingKind, ElseIf, Expr, ExprKind, FunctionDef, IfStmt, LiteralShape, MemberProperty,
    ObjectLiteral, Program, Property, Stmt, StmtKind, TryCatch,
};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
