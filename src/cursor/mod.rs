// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The capability contract between adaptors and the sequences they wrap.
//!
//! A *cursor* is a position you can read, advance, and compare. A *sequence*
//! is anything that hands out a `begin` and an `end` cursor. Range, enumerate
//! and zip are sequences built out of other sequences, and they only ever ask
//! their members for the capabilities below:
//!
//! | Tier            | Trait                  | Adds                                   |
//! |-----------------|------------------------|----------------------------------------|
//! | forward         | [`Cursor`]             | read, advance, equality                |
//! | bidirectional   | [`BidirectionalCursor`]| retreat                                |
//! | random access   | [`RandomAccessCursor`] | jump, distance, indexing, ordering     |
//!
//! The tier a cursor *claims* is its `Category`; the tier it *implements* is
//! the set of traits above. The two agree for every cursor in this crate, and
//! composite cursors only implement a tier when every member does, so asking
//! a forward zip to jump is a compile error rather than undefined behavior.
//!
//! Cursors own their state by value. Copying one yields an independent cursor;
//! none of them borrow mutable state from another.

pub mod category;
pub mod difference;
mod forward;
mod slice;

pub use category::{Bidirectional, Category, CategoryKind, Forward, RandomAccess};
pub use difference::DifferenceType;
pub use forward::{forward, ForwardCursor, ForwardSeq};
pub use slice::{cells, SliceCursor};

use std::iter::FusedIterator;

/// A readable, advanceable position in a sequence.
pub trait Cursor: Clone + PartialEq {
    /// What reading the cursor yields (the reference type).
    type Item;
    /// The owned form of `Item`.
    type Value;
    /// Signed type measuring distances between cursors.
    type Difference: DifferenceType;
    /// The capability tier this cursor claims.
    type Category: Category;

    /// Read the element under the cursor.
    fn get(&self) -> Self::Item;

    /// Step forward by one position.
    fn advance(&mut self);

    /// Whether a traversal from `self` toward `end` is finished.
    ///
    /// Defaults to equality. Composite cursors override it when the end of a
    /// traversal is not the same thing as positional equality.
    #[inline]
    fn reached(&self, end: &Self) -> bool {
        self == end
    }

    /// A copy of this cursor advanced by one position.
    #[inline]
    fn successor(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }

    /// Number of positions from `origin` to `self`, if it is known without
    /// walking. Random-access cursors always know it.
    #[inline]
    fn known_distance_from(&self, _origin: &Self) -> Option<Self::Difference> {
        None
    }

    /// Runtime view of `Self::Category`.
    #[inline]
    fn category() -> CategoryKind {
        <Self::Category as Category>::KIND
    }
}

/// A cursor that can also step backwards.
pub trait BidirectionalCursor: Cursor {
    /// Step backward by one position.
    fn retreat(&mut self);

    /// A copy of this cursor moved back by one position.
    #[inline]
    fn predecessor(&self) -> Self {
        let mut prev = self.clone();
        prev.retreat();
        prev
    }
}

/// A cursor with constant-time jumps and distances.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Move by `n` positions (negative moves backwards).
    fn jump(&mut self, n: Self::Difference);

    /// Number of positions from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> Self::Difference;

    /// Move back by `n` positions.
    #[inline]
    fn jump_back(&mut self, n: Self::Difference) {
        let zero: Self::Difference = num_traits::Zero::zero();
        let negated = num_traits::CheckedSub::checked_sub(&zero, &n);
        crate::require!(negated.is_some());
        if let Some(negated) = negated {
            self.jump(negated);
        }
    }

    /// A copy of this cursor moved by `n` positions.
    #[inline]
    fn offset(&self, n: Self::Difference) -> Self {
        let mut moved = self.clone();
        moved.jump(n);
        moved
    }

    /// Read the element `n` positions away without moving.
    #[inline]
    fn at(&self, n: Self::Difference) -> Self::Item {
        self.offset(n).get()
    }
}

/// Anything that can hand out a `(begin, end)` pair of cursors.
///
/// Each call produces fresh cursors, so a sequence can be traversed any
/// number of times.
pub trait Sequence {
    type Cursor: Cursor;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Cursor;

    /// Traverse the sequence as a standard iterator.
    #[inline]
    fn walk(&self) -> Walk<Self::Cursor> {
        Walk::new(self.begin(), self.end())
    }
}

/// Iterator over the items between two cursors.
///
/// Stops as soon as the front cursor [`reached`](Cursor::reached) the end.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    front: C,
    end: C,
}

impl<C: Cursor> Walk<C> {
    pub fn new(begin: C, end: C) -> Self {
        Self { front: begin, end }
    }

    /// The cursor the next item will be read from.
    pub fn position(&self) -> &C {
        &self.front
    }

    /// Split back into `(front, end)` cursors.
    pub fn into_cursors(self) -> (C, C) {
        (self.front, self.end)
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.reached(&self.end) {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}
