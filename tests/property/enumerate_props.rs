//! Enumerate property tests.

use super::common::collect;
use super::{range_strategy, vec_strategy};
use lockstep::{cells, enumerate, enumerate_from, forward, Cursor, Range, Sequence};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: indices count up by one from the start, alongside every element.
    #[test]
    fn prop_pairs_match_std_enumerate(data in vec_strategy(), start in -1000i64..1000) {
        let pairs = collect(&enumerate_from(&data, start));
        let expected: Vec<(i64, &i16)> = data
            .iter()
            .enumerate()
            .map(|(i, x)| (start + i as i64, x))
            .collect();
        prop_assert_eq!(pairs, expected);
    }

    /// Property: the index step is one regardless of the wrapped step.
    #[test]
    fn prop_index_independent_of_step((begin, end, step) in range_strategy()) {
        let r = Range::new(begin, end, step);
        let indices: Vec<usize> = enumerate(r).into_iter().map(|(i, _)| i).collect();
        prop_assert_eq!(indices, (0..r.len()).collect::<Vec<_>>());
    }

    /// Property: forward-only and random-access wrappers give the same pairs.
    #[test]
    fn prop_forward_wrapper_agrees(data in vec_strategy()) {
        let fast = collect(&enumerate(&data));
        let slow = collect(&enumerate(forward(data.iter())));
        prop_assert_eq!(fast, slow);
    }

    /// Property: `begin() + k` equals `k` single steps from `begin()`.
    #[test]
    fn prop_cursor_equality_path_independent(data in vec_strategy()) {
        let e = enumerate_from(&data, 3u32);
        let mut stepped = e.begin();
        for k in 0..=data.len() as isize {
            let jumped = e.begin() + k;
            prop_assert!(jumped == stepped);
            prop_assert_eq!(jumped.index(), stepped.index());
            if k < data.len() as isize {
                stepped.advance();
            }
        }
    }

    /// Property: writing through the pair's element updates the storage.
    #[test]
    fn prop_writes_through(mut data in vec_strategy()) {
        let original = data.clone();
        for (i, cell) in enumerate(cells(&mut data)) {
            cell.set(cell.get().wrapping_add(i as i16));
        }
        for (i, (now, before)) in data.iter().zip(&original).enumerate() {
            prop_assert_eq!(*now, before.wrapping_add(i as i16));
        }
    }
}
