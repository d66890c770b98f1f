//! Range property tests.
//!
//! - Traversal visits exactly the arithmetic progression below the bound
//! - `end() - begin()` equals the number of visited values
//! - Every way of traversing a range agrees
//! - Misdirected steps are rejected at construction

use super::common::{checks_on, collect, collect_backwards, collect_indexed, expect_violation};
use super::{range_strategy, unsigned_range_strategy};
use lockstep::{Cursor, RandomAccessCursor, Range, Sequence};
use proptest::prelude::*;

/// Straightforward reference traversal.
fn progression(begin: i32, end: i32, step: i32) -> Vec<i32> {
    let mut out = Vec::new();
    let mut v = begin;
    while (step > 0 && v < end) || (step < 0 && v > end) {
        out.push(v);
        v += step;
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: traversal matches the reference progression.
    #[test]
    fn prop_visits_progression((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        prop_assert_eq!(collect(&r), progression(begin, end, step));
    }

    /// Property: the cursor distance across a range is its length.
    #[test]
    fn prop_distance_is_count((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        let count = progression(begin, end, step).len();
        prop_assert_eq!(r.len(), count);
        prop_assert_eq!(r.end() - r.begin(), count as i64);
        prop_assert_eq!(r.iter().len(), count);
    }

    /// Property: the k-th value is `begin + k * step`.
    #[test]
    fn prop_kth_value((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        for (k, v) in r.iter().enumerate() {
            prop_assert_eq!(i64::from(v), i64::from(begin) + k as i64 * i64::from(step));
        }
    }

    /// Property: walking, iterating, retreating, and indexing agree.
    #[test]
    fn prop_traversals_agree((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        let walked = collect(&r);
        let iterated: Vec<i32> = r.into_iter().collect();
        let mut reversed: Vec<i32> = r.iter().rev().collect();
        reversed.reverse();
        let mut retreated = collect_backwards(&r);
        retreated.reverse();

        prop_assert_eq!(&walked, &iterated);
        prop_assert_eq!(&walked, &reversed);
        prop_assert_eq!(&walked, &retreated);
        prop_assert_eq!(&walked, &collect_indexed(&r));
    }

    /// Property: a range can be traversed any number of times.
    #[test]
    fn prop_restartable((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        prop_assert_eq!(collect(&r), collect(&r));
    }

    /// Property: `begin() + k` equals `k` single steps from `begin()`.
    #[test]
    fn prop_cursor_equality_path_independent((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        let mut stepped = r.begin();
        for k in 0..=(r.len() as i64) {
            prop_assert!(r.begin() + k == stepped);
            stepped.advance();
        }
    }

    /// Property: `contains` agrees with the visited values.
    #[test]
    fn prop_contains((begin, end, step) in range_strategy(), sample in -600i32..600) {
        let r = Range::new(begin, end, step);
        prop_assert_eq!(r.contains(sample), progression(begin, end, step).contains(&sample));
    }

    /// Property: unsigned ranges reach up to the type maximum.
    #[test]
    fn prop_unsigned_progression((begin, end, step) in unsigned_range_strategy()) {
        let r = Range::new(begin, end, step);
        let values = collect(&r);
        let expected: Vec<u8> = (u32::from(begin)..u32::from(end))
            .step_by(usize::from(step))
            .map(|v| v as u8)
            .collect();
        prop_assert_eq!(&values, &expected);
        prop_assert_eq!(r.end().distance_from(&r.begin()), expected.len() as i16);
    }

    /// Property: a step pointing away from the bound is a precondition violation.
    #[test]
    fn prop_misdirected_step_rejected(
        begin in -100i32..100,
        end in -100i32..100,
        step in 1i32..10,
    ) {
        prop_assume!(begin != end);
        checks_on();
        let wrong = if end > begin { -step } else { step };
        let v = expect_violation(|| Range::new(begin, end, wrong));
        prop_assert!(v.is_precondition());
        prop_assert!(Range::try_new(begin, end, wrong).is_err());
    }
}
