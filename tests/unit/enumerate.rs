//! Enumerate pairing, index semantics, and write-through.

use super::common::{checks_on, collect, collect_backwards, expect_violation, LETTERS};
use lockstep::{
    cells, enumerate, enumerate_from, forward, BidirectionalCursor, CategoryKind, Cursor,
    RandomAccessCursor, Range, Sequence,
};
use std::collections::LinkedList;

#[test]
fn test_pairs_start_at_offset() {
    let e = enumerate_from(&LETTERS, 10);
    let mut walk = e.walk();
    assert_eq!(walk.next(), Some((10, &"a")));
    assert_eq!(walk.next(), Some((11, &"b")));
    assert_eq!(walk.next(), Some((12, &"c")));
    assert_eq!(walk.next(), None);
}

#[test]
fn test_default_start_is_zero() {
    let pairs = collect(&enumerate(Range::new(10i32, 0, -4)));
    assert_eq!(pairs, vec![(0usize, 10), (1, 6), (2, 2)]);
}

#[test]
fn test_index_ignores_wrapped_step() {
    let e = enumerate_from(Range::new(0u32, 1000, 250), -2i8);
    let indices: Vec<i8> = e.into_iter().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![-2, -1, 0, 1]);
}

#[test]
fn test_forward_only_sequence() {
    let list: LinkedList<char> = "xyz".chars().collect();
    let e = enumerate(forward(list.iter().copied()));
    assert_eq!(collect(&e), vec![(0, 'x'), (1, 'y'), (2, 'z')]);
}

#[test]
fn test_category_mirrors_wrapped() {
    fn category<S: Sequence>(_: &S) -> CategoryKind {
        S::Cursor::category()
    }
    let list: LinkedList<u8> = LinkedList::new();
    assert_eq!(category(&enumerate(&LETTERS)), CategoryKind::RandomAccess);
    assert_eq!(category(&enumerate(Range::to(3u8))), CategoryKind::RandomAccess);
    assert_eq!(
        category(&enumerate(forward(list.iter()))),
        CategoryKind::Forward
    );
}

#[test]
fn test_writes_reach_wrapped_storage() {
    let mut data = [1, 2, 3, 4];
    for (i, cell) in enumerate(cells(&mut data)) {
        cell.set(cell.get() * 10 + i as i32);
    }
    assert_eq!(data, [10, 21, 32, 43]);
}

#[test]
fn test_random_access_moves_index() {
    let e = enumerate_from(&LETTERS, 100u16);
    let c = e.begin() + 2;
    assert_eq!(c.get(), (102, &"c"));
    assert_eq!((c - 1).get(), (101, &"b"));
    assert_eq!(c.distance_from(&e.begin()), 2);
    assert_eq!(e.begin().at(1), (101, &"b"));
}

#[test]
fn test_retreat_from_end() {
    let e = enumerate_from(&LETTERS, 1u8);
    let mut c = e.end();
    let mut seen = Vec::new();
    while c != e.begin() {
        c.retreat();
        seen.push(c.get());
    }
    assert_eq!(seen, vec![(3, &"c"), (2, &"b"), (1, &"a")]);
}

#[test]
fn test_collect_backwards() {
    let data = [1, 2, 3];
    let pairs = collect_backwards(&enumerate(&data));
    assert_eq!(pairs, vec![(2usize, &3), (1, &2), (0, &1)]);

    let r = Range::new(0i32, 9, 3);
    let pairs = collect_backwards(&enumerate_from(r, -1i64));
    assert_eq!(pairs, vec![(1, 6), (0, 3), (-1, 0)]);
}

#[test]
fn test_end_carries_index_past_last_element() {
    let e = enumerate_from(&LETTERS, 7u64);
    let mut c = e.begin();
    for _ in 0..LETTERS.len() {
        c.advance();
    }
    assert!(c == e.end());
    assert_eq!(e.end().index(), Some(10));
    assert_eq!(c.index(), e.end().index());
}

#[test]
fn test_forward_end_has_no_index() {
    let list: LinkedList<i32> = [1, 2].into_iter().collect();
    let e = enumerate(forward(&list));
    assert_eq!(e.end().index(), None);
    assert_eq!(collect(&e), vec![(0, &1), (1, &2)]);
}

#[test]
fn test_different_starts_fail_consistency_check() {
    checks_on();
    let letters = LETTERS;
    let a = enumerate_from(&letters, 0i32);
    let b = enumerate_from(&letters, 1i32);
    let v = expect_violation(|| a.begin() == b.begin());
    assert!(v.is_intermediate());
}
