//! Statement parsing: declarations, control flow and blocks.

use std::rc::Rc;

use virt_ir::{BindingKind, ElseIf, FunctionDef, IfStmt, Stmt, StmtKind, TokenKind, TryCatch};
use virt_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Let => self.parse_var_decl(BindingKind::Let)?,
            TokenKind::Const => self.parse_var_decl(BindingKind::Const)?,
            TokenKind::Fn if matches!(self.cursor.peek_next_kind(), TokenKind::Ident(_)) => {
                StmtKind::FnDecl(Rc::new(self.parse_function()?))
            }
            TokenKind::If => StmtKind::If(self.parse_if()?),
            TokenKind::While => self.parse_while()?,
            TokenKind::Try => StmtKind::TryCatch(self.parse_try_catch()?),
            TokenKind::Return => {
                self.advance();
                let value = if self.at_stmt_end() {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                StmtKind::Return(value)
            }
            TokenKind::Break => {
                self.advance();
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.advance();
                StmtKind::Continue
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        Ok(Stmt::new(kind, start.merge(self.previous_span())))
    }

    /// `return` takes no value when followed by one of these.
    fn at_stmt_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof
        )
    }

    fn parse_var_decl(&mut self, kind: BindingKind) -> Result<StmtKind, ParseError> {
        self.in_error_context(ErrorContext::VarDecl, |p| {
            p.advance(); // let / const
            let (name, _) = p.expect_ident()?;
            let value = match kind {
                BindingKind::Const => {
                    p.expect(&TokenKind::Eq)?;
                    Some(p.parse_expr()?)
                }
                BindingKind::Let if p.eat(&TokenKind::Eq) => Some(p.parse_expr()?),
                BindingKind::Let => None,
            };
            Ok(StmtKind::VarDecl { name, value, kind })
        })
    }

    /// `fn name? (params) { body }`
    pub(crate) fn parse_function(&mut self) -> Result<FunctionDef, ParseError> {
        self.in_error_context(ErrorContext::FunctionDef, |p| {
            let start = p.current_span();
            p.expect(&TokenKind::Fn)?;
            let name = p.cursor.eat_ident().map(|(name, _)| name);

            p.expect(&TokenKind::LParen)?;
            let mut params = Vec::new();
            while !p.check(&TokenKind::RParen) {
                let (param, _) = p.expect_ident()?;
                params.push(param);
                if !p.eat(&TokenKind::Comma) {
                    break;
                }
            }
            p.expect(&TokenKind::RParen)?;

            let body = p.parse_block()?;
            Ok(FunctionDef {
                name,
                params,
                body,
                span: start.merge(p.previous_span()),
            })
        })
    }

    fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        self.in_error_context(ErrorContext::IfStatement, |p| {
            p.expect(&TokenKind::If)?;
            let condition = p.parse_expr()?;
            let then_body = p.parse_block()?;

            let mut else_ifs = Vec::new();
            let mut else_body = None;
            while p.eat(&TokenKind::Else) {
                if p.check(&TokenKind::If) {
                    let start = p.current_span();
                    p.advance();
                    let condition = p.parse_expr()?;
                    let body = p.parse_block()?;
                    else_ifs.push(ElseIf {
                        condition,
                        body,
                        span: start.merge(p.previous_span()),
                    });
                } else if p.check(&TokenKind::LBrace) {
                    else_body = Some(p.parse_block()?);
                    break;
                } else {
                    return Err(p.unexpected("`if` or `{` after `else`"));
                }
            }

            Ok(IfStmt {
                condition,
                then_body,
                else_ifs,
                else_body,
            })
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.in_error_context(ErrorContext::WhileLoop, |p| {
            p.expect(&TokenKind::While)?;
            let condition = p.parse_expr()?;
            let body = p.parse_block()?;
            Ok(StmtKind::While { condition, body })
        })
    }

    fn parse_try_catch(&mut self) -> Result<TryCatch, ParseError> {
        self.in_error_context(ErrorContext::TryCatch, |p| {
            p.expect(&TokenKind::Try)?;
            let try_body = p.parse_block()?;
            p.expect(&TokenKind::Catch)?;
            let (catch_var, _) = p.expect_ident()?;
            let catch_body = p.parse_block()?;
            Ok(TryCatch {
                try_body,
                catch_var,
                catch_body,
            })
        })
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        let mut body = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.check(&TokenKind::RBrace) || self.is_at_end() {
                break;
            }
            body.push(self.parse_stmt()?);
        }
        self.in_error_context(ErrorContext::Block, |p| p.expect(&TokenKind::RBrace))?;
        Ok(body)
    }
}
