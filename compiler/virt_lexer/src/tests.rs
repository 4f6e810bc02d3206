#![expect(clippy::unwrap_used, reason = "tests assert on known-good input")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn keywords_and_identifiers() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let letter = interner.intern("letter");
    assert_eq!(
        kinds("let x const letter fn", &interner),
        vec![
            TokenKind::Let,
            TokenKind::Ident(x),
            TokenKind::Const,
            TokenKind::Ident(letter),
            TokenKind::Fn,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn operators_prefer_longest_match() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("= == != < <= > >= + - * / %", &interner),
        vec![
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("0 42 3.25", &interner),
        vec![
            TokenKind::Number(0.0),
            TokenKind::Number(42.0),
            TokenKind::Number(3.25),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn both_quote_styles_strip_delimiters() {
    let interner = StringInterner::new();
    let hello = interner.intern("hello world");
    let empty = interner.intern("");
    assert_eq!(
        kinds(r#""hello world" 'hello world' ''"#, &interner),
        vec![
            TokenKind::Str(hello),
            TokenKind::Str(hello),
            TokenKind::Str(empty),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_and_newlines_are_skipped() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("// leading\nx // trailing\n\n  x", &interner),
        vec![TokenKind::Ident(x), TokenKind::Ident(x), TokenKind::Eof]
    );
}

#[test]
fn spans_cover_token_text() {
    let interner = StringInterner::new();
    let tokens = lex("let  abc", &interner).unwrap();
    assert_eq!(tokens.get(0).unwrap().span, Span::new(0, 3));
    assert_eq!(tokens.get(1).unwrap().span, Span::new(5, 8));
    assert_eq!(tokens.get(2).unwrap().span, Span::point(8));
}

#[test]
fn empty_source_is_just_eof() {
    let interner = StringInterner::new();
    assert_eq!(kinds("", &interner), vec![TokenKind::Eof]);
}

#[test]
fn unexpected_character() {
    let interner = StringInterner::new();
    let err = lex("let x = 1 # 2", &interner).unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedChar {
            ch: '#',
            span: Span::new(10, 11)
        }
    );
    assert_eq!(err.to_string(), "unexpected character `#`");
}

#[test]
fn unterminated_string() {
    let interner = StringInterner::new();
    let err = lex("let s = 'abc\nx", &interner).unwrap_err();
    assert_eq!(err, LexError::UnterminatedString { span: Span::new(8, 12) });
}

proptest! {
    #[test]
    fn integer_literals_lex_exactly(n in 0u32..1_000_000) {
        let interner = StringInterner::new();
        let tokens = kinds(&n.to_string(), &interner);
        prop_assert_eq!(tokens, vec![TokenKind::Number(f64::from(n)), TokenKind::Eof]);
    }

    #[test]
    fn identifiers_round_trip_through_interner(name in "[a-z_][a-z0-9_]{0,12}") {
        let keywords = [
            "let", "const", "fn", "if", "else", "while", "try", "catch",
            "return", "break", "continue",
        ];
        prop_assume!(!keywords.contains(&name.as_str()));
        let interner = StringInterner::new();
        match kinds(&name, &interner)[0] {
            TokenKind::Ident(interned) => prop_assert_eq!(interner.lookup(interned), name.as_str()),
            other => prop_assert!(false, "expected identifier, got {:?}", other),
        }
    }
}
