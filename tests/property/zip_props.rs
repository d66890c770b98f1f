//! Zip property tests.
//!
//! - Length is the shortest member's length
//! - Items match `std::iter::zip` member by member
//! - First-member anchoring agrees with every member for equal lengths

use super::common::{checks_on, collect, expect_violation};
use super::{range_strategy, vec_strategy};
use lockstep::{forward, zip, Cursor, RandomAccessCursor, Range, Sequence};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: a zip yields `min(len)` pairs, in lock-step.
    #[test]
    fn prop_shortest_wins(a in vec_strategy(), b in vec_strategy()) {
        let pairs = collect(&zip!(&a, &b));
        let expected: Vec<(&i16, &i16)> = a.iter().zip(b.iter()).collect();
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        prop_assert_eq!(pairs, expected);
    }

    /// Property: three members, one of them a range, stay in lock-step.
    #[test]
    fn prop_three_way(
        a in vec_strategy(),
        b in vec_strategy(),
        (begin, end, step) in range_strategy(),
    ) {
        let r = Range::new(begin, end, step);
        let rows = collect(&zip!(&a, r, &b));
        let expected: Vec<(&i16, i32, &i16)> = a
            .iter()
            .zip(r)
            .zip(b.iter())
            .map(|((x, v), y)| (x, v, y))
            .collect();
        prop_assert_eq!(rows, expected);
    }

    /// Property: a forward-only member changes the category, not the items.
    #[test]
    fn prop_forward_member_same_items(a in vec_strategy(), b in vec_strategy()) {
        let fast = collect(&zip!(&a, &b));
        let slow = collect(&zip!(&a, forward(b.iter())));
        prop_assert_eq!(fast, slow);
    }

    /// Property: with equal lengths, first-member distance is every member's distance.
    #[test]
    fn prop_anchored_distance(data in vec_strategy()) {
        checks_on();
        let r = Range::to(data.len());
        let z = zip!(&data, r);
        let d = z.end().distance_from(&z.begin());
        prop_assert_eq!(d as usize, data.len());
        prop_assert!(z.begin() <= z.end());
    }

    /// Property: `begin() + k` equals `k` single steps from `begin()`.
    #[test]
    fn prop_cursor_equality_path_independent(a in vec_strategy(), b in vec_strategy()) {
        let len = a.len().min(b.len());
        let z = zip!(&a[..len], &b[..len]);
        let mut stepped = z.begin();
        for k in 0..=len as isize {
            prop_assert!(z.begin() + k == stepped);
            if (k as usize) < len {
                stepped.advance();
            }
        }
    }

    /// Property: comparing the end of members with different lengths is flagged.
    #[test]
    fn prop_unequal_lengths_flagged(a in vec_strategy(), extra in 1usize..5) {
        checks_on();
        let b: Vec<i16> = a.iter().copied().chain(std::iter::repeat(0).take(extra)).collect();
        let z = zip!(&a, &b);
        let v = expect_violation(|| z.begin() + a.len() as isize == z.end());
        prop_assert!(v.is_intermediate());
    }
}
