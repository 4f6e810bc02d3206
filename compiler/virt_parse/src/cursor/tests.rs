use super::*;
use virt_ir::{StringInterner, TokenList};

fn tokens(source: &str, interner: &StringInterner) -> TokenList {
    virt_lexer::lex(source, interner).unwrap_or_default()
}

#[test]
fn advance_stops_at_eof() {
    let interner = StringInterner::new();
    let list = tokens("x", &interner);
    let mut cursor = Cursor::new(list.as_slice());
    assert!(cursor.check_ident());
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn check_ignores_payload() {
    let interner = StringInterner::new();
    let list = tokens("foo 12", &interner);
    let mut cursor = Cursor::new(list.as_slice());
    assert!(cursor.check(&TokenKind::Ident(Name::EMPTY)));
    assert!(!cursor.check(&TokenKind::Number(0.0)));
    cursor.advance();
    assert!(cursor.check(&TokenKind::Number(0.0)));
}

#[test]
fn eat_only_consumes_matches() {
    let interner = StringInterner::new();
    let list = tokens("( )", &interner);
    let mut cursor = Cursor::new(list.as_slice());
    assert!(!cursor.eat(&TokenKind::RParen));
    assert!(cursor.eat(&TokenKind::LParen));
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert_eq!(cursor.current_kind(), TokenKind::RParen);
}

#[test]
fn peek_and_eat_ident() {
    let interner = StringInterner::new();
    let name = interner.intern("name");
    let list = tokens("fn name", &interner);
    let mut cursor = Cursor::new(list.as_slice());
    assert_eq!(cursor.peek_next_kind(), TokenKind::Ident(name));
    assert_eq!(cursor.eat_ident(), None);
    cursor.advance();
    assert_eq!(cursor.eat_ident(), Some((name, Span::new(3, 7))));
}

#[test]
fn empty_slice_reads_as_eof() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.previous_span(), Span::DUMMY);
}
