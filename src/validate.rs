//! Diagnostic overlap checking of range tables.

use crate::field::Field;
use crate::span::Span;

/// Whether an end of `a` lies strictly inside `b`.
///
/// Shared end points do not count, and neither does `b` nesting strictly
/// inside `a`; callers wanting a symmetric test check both orders.
pub fn has_overlap(a: Span, b: Span) -> bool {
    (a.low > b.low && a.low < b.high) || (a.high > b.low && a.high < b.high)
}

/// True if no field's span overlaps the span of any field after it.
pub fn validate(fields: &[Field]) -> bool {
    fields.iter().enumerate().all(|(i, field)| {
        fields[i..]
            .iter()
            .all(|later| !has_overlap(field.span, later.span))
    })
}

#[test]
fn shared_boundary_is_not_overlap() {
    assert!(!has_overlap(Span::new(0, 10), Span::new(10, 20)));
    assert!(!has_overlap(Span::new(10, 20), Span::new(0, 10)));
}

#[test]
fn partial_overlap() {
    assert!(has_overlap(Span::new(0, 10), Span::new(5, 15)));
    assert!(has_overlap(Span::new(5, 15), Span::new(0, 10)));
}

#[test]
fn nesting_is_one_sided() {
    assert!(has_overlap(Span::new(5, 10), Span::new(0, 20)));
    assert!(!has_overlap(Span::new(0, 20), Span::new(5, 10)));
    assert!(!has_overlap(Span::new(3, 3), Span::new(3, 3)));
}

#[test]
fn validate_tables() {
    let disjoint = vec![
        Field::new(0, 9, vec!["Latin"]),
        Field::new(10, 19, vec!["Greek"]),
        Field::new(19, 25, vec!["Greek"]),
    ];
    assert!(validate(&disjoint));

    let overlapping = vec![
        Field::new(0, 9, vec!["Latin"]),
        Field::new(5, 19, vec!["Greek"]),
    ];
    assert!(!validate(&overlapping));

    assert!(validate(&[]));
}
