use super::*;

#[test]
fn merge_covers_both() {
    let a = Span::new(4, 8);
    let b = Span::new(2, 6);
    assert_eq!(a.merge(b), Span::new(2, 8));
    assert_eq!(b.merge(a), Span::new(2, 8));
}

#[test]
fn point_is_empty() {
    let p = Span::point(7);
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
}

#[test]
fn from_range_round_trips() {
    assert_eq!(Span::from_range(3..9).to_range(), 3..9);
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Span::new(1, 5)), "1..5");
}

#[test]
fn line_col_counts_newlines() {
    let source = "let x = 1\nlet y = x\n  y";
    assert_eq!(Span::point(0).line_col(source), (1, 1));
    assert_eq!(Span::point(14).line_col(source), (2, 5));
    assert_eq!(Span::point(22).line_col(source), (3, 3));
}
