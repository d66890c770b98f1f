// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Cursor pairing a running index with a wrapped cursor.
///
/// The index is `None` when it is unknown or not representable in `I`: on
/// the end cursor of an [`Enumerate`](super::Enumerate) whose wrapped
/// sequence cannot measure itself, and after stepping past `I::MAX` (or
/// below `I::MIN`). Such a cursor still moves and compares, but reading it
/// is a precondition violation.
#[derive(Debug, Clone, Copy)]
pub struct EnumerateCursor<I, C> {
    index: Option<I>,
    inner: C,
}

impl<I: PrimInt, C: Cursor> EnumerateCursor<I, C> {
    pub fn new(index: I, inner: C) -> Self {
        Self {
            index: Some(index),
            inner,
        }
    }

    pub(crate) fn unindexed(inner: C) -> Self {
        Self { index: None, inner }
    }

    /// The current index, if known.
    pub fn index(&self) -> Option<I> {
        self.index
    }

    /// The wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn shift_index(&mut self, n: C::Difference) {
        self.index = self.index.and_then(|index| {
            let target = index.to_i128()?.checked_add(n.to_i128()?)?;
            <I as NumCast>::from(target)
        });
    }
}

/// Equal when the wrapped cursors are equal. Equal cursors carrying indices
/// must carry the same index.
impl<I: PrimInt, C: Cursor> PartialEq for EnumerateCursor<I, C> {
    fn eq(&self, other: &Self) -> bool {
        let equal = self.inner == other.inner;
        if equal {
            if let (Some(a), Some(b)) = (self.index, other.index) {
                crate::check!(a == b);
            }
        }
        equal
    }
}

impl<I: PrimInt, C: Cursor + PartialOrd> PartialOrd for EnumerateCursor<I, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<I: PrimInt, C: Cursor> Cursor for EnumerateCursor<I, C> {
    type Item = (I, C::Item);
    type Value = (I, C::Value);
    type Difference = C::Difference;
    type Category = C::Category;

    #[inline]
    fn get(&self) -> Self::Item {
        crate::require!(self.index.is_some());
        match self.index {
            Some(index) => (index, self.inner.get()),
            None => crate::not_reachable!(),
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
        self.index = self.index.and_then(|i| i.checked_add(&I::one()));
    }

    #[inline]
    fn reached(&self, end: &Self) -> bool {
        self.inner.reached(&end.inner)
    }

    #[inline]
    fn known_distance_from(&self, origin: &Self) -> Option<C::Difference> {
        self.inner.known_distance_from(&origin.inner)
    }
}

impl<I: PrimInt, C: BidirectionalCursor> BidirectionalCursor for EnumerateCursor<I, C> {
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
        self.index = self.index.and_then(|i| i.checked_sub(&I::one()));
    }
}

impl<I: PrimInt, C: RandomAccessCursor> RandomAccessCursor for EnumerateCursor<I, C> {
    #[inline]
    fn jump(&mut self, n: C::Difference) {
        self.inner.jump(n);
        self.shift_index(n);
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> C::Difference {
        self.inner.distance_from(&origin.inner)
    }
}

impl<I: PrimInt, C: RandomAccessCursor> AddAssign<C::Difference> for EnumerateCursor<I, C> {
    fn add_assign(&mut self, n: C::Difference) {
        self.jump(n);
    }
}

impl<I: PrimInt, C: RandomAccessCursor> SubAssign<C::Difference> for EnumerateCursor<I, C> {
    fn sub_assign(&mut self, n: C::Difference) {
        self.jump_back(n);
    }
}

impl<I: PrimInt, C: RandomAccessCursor> Add<C::Difference> for EnumerateCursor<I, C> {
    type Output = Self;

    fn add(mut self, n: C::Difference) -> Self {
        self += n;
        self
    }
}

impl<I: PrimInt, C: RandomAccessCursor> Sub<C::Difference> for EnumerateCursor<I, C> {
    type Output = Self;

    fn sub(mut self, n: C::Difference) -> Self {
        self -= n;
        self
    }
}
