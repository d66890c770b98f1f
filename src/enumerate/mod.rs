// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pair a running index with each element of a sequence.
//!
//! The index type is chosen by the caller and has nothing to do with the
//! wrapped sequence's own positions: it starts at the given offset and moves
//! by exactly one per step.
//!
//! ```
//! use lockstep::enumerate_from;
//!
//! let letters = ["a", "b", "c"];
//! let pairs: Vec<(u32, &&str)> = enumerate_from(&letters, 10).into_iter().collect();
//! assert_eq!(pairs, vec![(10, &"a"), (11, &"b"), (12, &"c")]);
//! ```
//!
//! Equality, ordering, distance, and category all come from the wrapped
//! cursor. The index only takes part as a consistency check: two equal
//! cursors with different indices (say, from two `Enumerate`s over the same
//! slice with different starts) fail an intermediate check.

mod cursor;

pub use cursor::EnumerateCursor;

use crate::cursor::{Cursor, Sequence, Walk};
use num_traits::{NumCast, PrimInt, ToPrimitive};

/// A sequence of `(index, element)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct Enumerate<I, S> {
    seq: S,
    start: I,
}

impl<I: PrimInt, S: Sequence> Enumerate<I, S> {
    pub fn new(seq: S, start: I) -> Self {
        Self { seq, start }
    }

    pub fn start(&self) -> I {
        self.start
    }

    /// The wrapped sequence.
    pub fn get_ref(&self) -> &S {
        &self.seq
    }

    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<I: PrimInt, S: Sequence> Sequence for Enumerate<I, S> {
    type Cursor = EnumerateCursor<I, S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        EnumerateCursor::new(self.start, self.seq.begin())
    }

    /// Carries `start + len` when the wrapped sequence can measure itself,
    /// so stepping back from it yields readable cursors.
    fn end(&self) -> Self::Cursor {
        let end = self.seq.end();
        let index = end
            .known_distance_from(&self.seq.begin())
            .and_then(|len| {
                let target = self.start.to_i128()?.checked_add(len.to_i128()?)?;
                <I as NumCast>::from(target)
            });
        match index {
            Some(index) => EnumerateCursor::new(index, end),
            None => EnumerateCursor::unindexed(end),
        }
    }
}

impl<I: PrimInt, S: Sequence> Sequence for &Enumerate<I, S> {
    type Cursor = EnumerateCursor<I, S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor {
        (**self).end()
    }
}

impl<I: PrimInt, S: Sequence> IntoIterator for Enumerate<I, S> {
    type Item = <EnumerateCursor<I, S::Cursor> as Cursor>::Item;
    type IntoIter = Walk<EnumerateCursor<I, S::Cursor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

impl<I: PrimInt, S: Sequence> IntoIterator for &Enumerate<I, S> {
    type Item = <EnumerateCursor<I, S::Cursor> as Cursor>::Item;
    type IntoIter = Walk<EnumerateCursor<I, S::Cursor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

/// Enumerate from zero with a `usize` index.
pub fn enumerate<S: Sequence>(seq: S) -> Enumerate<usize, S> {
    Enumerate::new(seq, 0)
}

/// Enumerate from `start`.
pub fn enumerate_from<I: PrimInt, S: Sequence>(seq: S, start: I) -> Enumerate<I, S> {
    Enumerate::new(seq, start)
}
