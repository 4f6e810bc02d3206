//! Expression parsing.
//!
//! Precedence, lowest first:
//! assignment, comparison, additive, multiplicative, postfix, primary.

use std::rc::Rc;

use virt_ir::{
    BinaryOp, Expr, ExprKind, LiteralShape, MemberProperty, ObjectLiteral, Property, TokenKind,
};
use virt_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `target = value`, right associative.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_comparison()?;
        if !self.check(&TokenKind::Eq) {
            return Ok(target);
        }
        if !matches!(target.kind, ExprKind::Ident(_) | ExprKind::Member { .. }) {
            return Err(ParseError::InvalidAssignTarget { span: target.span });
        }
        self.advance();
        let value = self.parse_expr()?;
        let span = target.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        ))
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_postfix()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_postfix()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    /// Member access and calls: `a.b`, `a[b]`, `a(b)`, in any order.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    let (name, _) = self.in_error_context(ErrorContext::MemberAccess, |p| {
                        p.advance();
                        p.expect_ident()
                    })?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            property: MemberProperty::Named(name),
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    let index = self.in_error_context(ErrorContext::MemberAccess, |p| {
                        p.advance();
                        let index = p.parse_expr()?;
                        p.expect(&TokenKind::RBracket)?;
                        Ok(index)
                    })?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            property: MemberProperty::Computed(Box::new(index)),
                        },
                        span,
                    );
                }
                TokenKind::LParen => {
                    let args = self.in_error_context(ErrorContext::CallArgs, |p| {
                        p.advance();
                        p.parse_comma_list(&TokenKind::RParen)
                    })?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Number(value) => {
                self.advance();
                Ok(Expr::new(ExprKind::Number(value), span))
            }
            TokenKind::Str(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Str(name), span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Ident(name), span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.in_error_context(ErrorContext::Expression, |p| {
                    p.expect(&TokenKind::RParen)
                })?;
                Ok(inner)
            }
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_object_literal(),
            TokenKind::Fn => {
                let function = self.parse_function()?;
                let span = function.span;
                Ok(Expr::new(ExprKind::Function(Rc::new(function)), span))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// `[a, b, c]`, represented as an object literal keyed by index.
    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::ArrayLiteral, |p| {
            let start = p.current_span();
            p.expect(&TokenKind::LBracket)?;
            let elements = p.parse_comma_list(&TokenKind::RBracket)?;
            let interner = p.interner;
            let properties = elements
                .into_iter()
                .enumerate()
                .map(|(index, value)| Property {
                    key: interner.intern(&index.to_string()),
                    span: value.span,
                    value: Some(value),
                })
                .collect();
            Ok(Expr::new(
                ExprKind::Object(ObjectLiteral {
                    properties,
                    shape: LiteralShape::Sequence,
                }),
                start.merge(p.previous_span()),
            ))
        })
    }

    /// `{ key: value, "key": value, shorthand }`
    fn parse_object_literal(&mut self) -> Result<Expr, ParseError> {
        self.in_error_context(ErrorContext::ObjectLiteral, |p| {
            let start = p.current_span();
            p.expect(&TokenKind::LBrace)?;
            let mut properties = Vec::new();
            while !p.check(&TokenKind::RBrace) {
                let key_span = p.current_span();
                let key = match p.current_kind() {
                    TokenKind::Ident(name) | TokenKind::Str(name) => {
                        p.advance();
                        name
                    }
                    _ => return Err(p.unexpected("property name")),
                };
                let value = if p.eat(&TokenKind::Colon) {
                    Some(p.parse_expr()?)
                } else {
                    None
                };
                properties.push(Property {
                    key,
                    value,
                    span: key_span.merge(p.previous_span()),
                });
                if !p.eat(&TokenKind::Comma) {
                    break;
                }
            }
            p.expect(&TokenKind::RBrace)?;
            Ok(Expr::new(
                ExprKind::Object(ObjectLiteral {
                    properties,
                    shape: LiteralShape::Record,
                }),
                start.merge(p.previous_span()),
            ))
        })
    }

    /// Comma-separated expressions up to and including `close`.
    /// A trailing comma is allowed.
    fn parse_comma_list(&mut self, close: &TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}
