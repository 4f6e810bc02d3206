//! Parse error types.

use std::fmt;

use virt_ir::{Span, TokenKind};
use virt_lexer::LexError;

/// What the parser was working on when an error occurred.
///
/// Rendered as the "while parsing ..." suffix of error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    Statement,
    VarDecl,
    FunctionDef,
    IfStatement,
    WhileLoop,
    TryCatch,
    Block,
    Expression,
    ArrayLiteral,
    ObjectLiteral,
    CallArgs,
    MemberAccess,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::Program => "the program",
            ErrorContext::Statement => "a statement",
            ErrorContext::VarDecl => "a variable declaration",
            ErrorContext::FunctionDef => "a function",
            ErrorContext::IfStatement => "an if statement",
            ErrorContext::WhileLoop => "a while loop",
            ErrorContext::TryCatch => "a try/catch statement",
            ErrorContext::Block => "a block",
            ErrorContext::Expression => "an expression",
            ErrorContext::ArrayLiteral => "an array literal",
            ErrorContext::ObjectLiteral => "an object literal",
            ErrorContext::CallArgs => "call arguments",
            ErrorContext::MemberAccess => "a member access",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error produced while turning source text into a `Program`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found} while parsing {context}")]
    Expected {
        expected: &'static str,
        found: TokenKind,
        span: Span,
        context: ErrorContext,
    },

    #[error("invalid assignment target; only variables and members can be assigned")]
    InvalidAssignTarget { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::Expected { span, .. } | ParseError::InvalidAssignTarget { span } => *span,
        }
    }
}
