// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Walk several sequences in lock-step.
//!
//! ```
//! use lockstep::zip;
//!
//! let numbers = [1, 2, 3, 4];
//! let letters = ["x", "y"];
//! let pairs: Vec<(&i32, &&str)> = zip!(&numbers, &letters).into_iter().collect();
//! assert_eq!(pairs, vec![(&1, &"x"), (&2, &"y")]);
//! ```
//!
//! Members may have different element types, different distance types and
//! different categories. The zip's category is the weakest member's, so a zip
//! over a forward-only sequence has no `jump`, `at`, or `+=` at all: calling
//! them does not compile.
//!
//! ```compile_fail
//! use lockstep::{forward, zip, RandomAccessCursor, Sequence};
//!
//! let data = [1, 2, 3];
//! let z = zip!(&data, forward(data.iter()));
//! let mut c = z.begin();
//! c.jump(1);
//! ```
//!
//! A one-member zip yields the member's items unchanged rather than
//! one-element tuples. Arities 1 through 8 are supported.

mod cursor;
mod traits;

pub use cursor::ZipCursor;
pub use traits::{
    BidirectionalCursorTuple, CursorTuple, Member, RandomAccessCursorTuple, SequenceTuple,
};

use crate::cursor::{Cursor, Sequence, Walk};

/// A tuple of sequences traversed together.
#[derive(Debug, Clone, Copy)]
pub struct Zip<T> {
    seqs: T,
}

impl<T: SequenceTuple> Zip<T> {
    pub fn new(seqs: T) -> Self {
        Self { seqs }
    }

    /// The wrapped sequences.
    pub fn sequences(&self) -> &T {
        &self.seqs
    }

    pub fn into_sequences(self) -> T {
        self.seqs
    }

    /// The `N`th wrapped sequence.
    pub fn member<const N: usize>(&self) -> &<T as Member<N>>::Output
    where
        T: Member<N>,
    {
        self.seqs.member()
    }
}

impl<T: SequenceTuple> Sequence for Zip<T> {
    type Cursor = ZipCursor<T::Cursors>;

    fn begin(&self) -> Self::Cursor {
        ZipCursor::new(self.seqs.begins())
    }

    fn end(&self) -> Self::Cursor {
        ZipCursor::new(self.seqs.ends())
    }
}

impl<T: SequenceTuple> Sequence for &Zip<T> {
    type Cursor = ZipCursor<T::Cursors>;

    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor {
        (**self).end()
    }
}

impl<T: SequenceTuple> IntoIterator for Zip<T> {
    type Item = <ZipCursor<T::Cursors> as Cursor>::Item;
    type IntoIter = Walk<ZipCursor<T::Cursors>>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

impl<T: SequenceTuple> IntoIterator for &Zip<T> {
    type Item = <ZipCursor<T::Cursors> as Cursor>::Item;
    type IntoIter = Walk<ZipCursor<T::Cursors>>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

/// Zip a tuple of sequences; `zip((a,))` is a one-member zip.
pub fn zip<T: SequenceTuple>(seqs: T) -> Zip<T> {
    Zip::new(seqs)
}

/// Zip sequences given as separate arguments.
///
/// `zip!(a, b, c)` is `zip((a, b, c))`.
#[macro_export]
macro_rules! zip {
    ($($seq:expr),+ $(,)?) => {
        $crate::zip::zip(($($seq,)+))
    };
}
