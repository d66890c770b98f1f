//! Range construction, traversal, and cursor arithmetic.

use super::common::{checks_on, collect, collect_backwards, collect_indexed, expect_violation};
use lockstep::{
    range, range_to, BidirectionalCursor, Cursor, RandomAccessCursor, Range, RangeError,
    Sequence,
};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_wrong_signed_step_is_rejected() {
    checks_on();
    let v = expect_violation(|| Range::new(5, 2, 1));
    assert!(v.is_precondition());
}

#[test]
fn test_negative_step_counts_down() {
    let r = Range::new(5, 2, -1);
    assert_eq!(collect(&r), vec![5, 4, 3]);
}

#[test]
fn test_end_only_constructor_starts_at_zero() {
    assert_eq!(collect(&Range::to(4u16)), vec![0, 1, 2, 3]);
    assert_eq!(range_to(4u16), Range::new(0, 4, 1));
    assert_eq!(range(1i8, 7, 3), Range::new(1, 7, 3));
}

#[test]
fn test_zero_step_needs_empty_range() {
    checks_on();
    assert!(expect_violation(|| Range::new(1u32, 2, 0)).is_precondition());
    assert!(Range::new(2u32, 2, 0).is_empty());
    assert_eq!(Range::try_new(1u32, 2, 0), Err(RangeError::ZeroStep));
}

#[test]
fn test_unsigned_cannot_count_down() {
    checks_on();
    assert!(expect_violation(|| Range::new(9u8, 3, 1)).is_precondition());
    assert!(matches!(
        Range::try_new(9u8, 3, 1),
        Err(RangeError::WrongDirection { begin: 9, end: 3, step: 1 })
    ));
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_uneven_span_stops_before_bound() {
    let r = Range::new(0i32, 10, 4);
    assert_eq!(collect(&r), vec![0, 4, 8]);
    assert_eq!(r.len(), 3);
    assert_eq!(r.end() - r.begin(), 3);
}

#[test]
fn test_restartable() {
    let r = Range::new(-6i64, 6, 5);
    let first: Vec<i64> = r.walk().collect();
    let second: Vec<i64> = r.walk().collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![-6, -1, 4]);
}

#[test]
fn test_three_traversals_agree() {
    let r = Range::new(20i16, -3, -7);
    let forward = collect(&r);
    let mut backward = collect_backwards(&r);
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward, collect_indexed(&r));
    assert_eq!(forward, r.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_iterator_is_exact_and_reversible() {
    let r = Range::new(3usize, 30, 9);
    let it = r.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.rev().collect::<Vec<_>>(), vec![21, 12, 3]);
}

#[test]
fn test_span_at_type_limits() {
    let r = Range::new(i8::MIN, i8::MAX, 1);
    assert_eq!(r.len(), 255);
    assert_eq!(r.iter().last(), Some(126));

    let r = Range::new(i8::MAX, i8::MIN, -100);
    assert_eq!(collect(&r), vec![127, 27, -73]);
}

#[test]
fn test_for_loop_over_reference() {
    let r = Range::new(1u64, 4, 1);
    let mut total = 0;
    for v in &r {
        total += v;
    }
    assert_eq!(total, 6);
}

// ============================================================================
// CURSORS
// ============================================================================

#[test]
fn test_cursor_equality_is_path_independent() {
    let r = Range::new(7i32, 100, 3);
    for k in 0..10i64 {
        let jumped = r.begin() + k;
        let mut stepped = r.begin();
        for _ in 0..k {
            stepped.advance();
        }
        assert_eq!(jumped, stepped, "k = {}", k);
    }
}

#[test]
fn test_cursor_with_other_step_never_equals_end() {
    let r = Range::new(0i32, 4, 2);
    let odd_step = lockstep::RangeCursor::new(4i32, 1);
    assert!(r.end() != odd_step);
}

#[test]
fn test_distance_with_other_step_is_rejected() {
    checks_on();
    let r = Range::new(0i32, 4, 2);
    let odd_step = lockstep::RangeCursor::new(4i32, 1);
    let v = expect_violation(|| r.end().distance_from(&odd_step));
    assert!(v.is_precondition());
}

#[test]
fn test_unsigned_retreat_guard() {
    checks_on();
    let r = Range::new(0u32, 6, 2);
    let mut c = r.begin();
    c.advance();
    c.retreat();
    assert_eq!(c.get(), 0);
    let v = expect_violation(move || c.retreat());
    assert!(v.is_precondition());
}

#[test]
fn test_indexing_and_ordering() {
    let r = Range::new(100u8, 200, 25);
    let begin = r.begin();
    assert_eq!(begin.at(3), 175);
    assert!(begin < r.end());
    assert!(begin + 4 == r.end());
    assert_eq!(
        <lockstep::RangeCursor<u8> as Cursor>::category(),
        lockstep::CategoryKind::RandomAccess
    );
}

#[test]
fn test_deref_past_domain_is_rejected() {
    checks_on();
    let r = Range::new(250u8, 255, 2);
    let v = expect_violation(|| r.end().get());
    assert!(v.is_precondition());
}
