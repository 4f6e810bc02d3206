//! Recursive descent parser for Virt.
//!
//! Produces the boxed `Program` tree the evaluator walks.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use virt_ir::{Name, Program, Span, StringInterner, Token, TokenKind, TokenList};

/// Lex and parse `source` in one step.
pub fn parse(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    let tokens = virt_lexer::lex(source, interner)?;
    Parser::new(&tokens, interner).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    context: ErrorContext,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
            interner,
            context: ErrorContext::Program,
        }
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Consume a token of the given kind or report what was found instead.
    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        self.cursor
            .eat_ident()
            .ok_or_else(|| self.unexpected("identifier"))
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Expected {
            expected,
            found: self.current_kind(),
            span: self.current_span(),
            context: self.context,
        }
    }

    /// Run `f` with `context` as the "while parsing" description for errors.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Parse every statement up to end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if self.is_at_end() {
                break;
            }
            body.push(self.parse_stmt()?);
        }
        Ok(Program { body })
    }
}
