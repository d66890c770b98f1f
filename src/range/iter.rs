// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::{Range, RangeInteger};
use num_traits::{NumCast, One, ToPrimitive, Zero};
use std::iter::FusedIterator;

/// Owning iterator over a [`Range`].
///
/// Unlike a [`Walk`](crate::cursor::Walk) over range cursors this knows its
/// length up front, so it can also run from the back.
#[derive(Debug, Clone)]
pub struct RangeIter<T: RangeInteger> {
    front: T::Difference,
    step: T::Difference,
    remaining: T::Difference,
}

impl<T: RangeInteger> RangeIter<T> {
    pub(crate) fn new(range: &Range<T>) -> Self {
        Self {
            front: range.begin_value().widen(),
            step: range.step().widen(),
            remaining: range.count(),
        }
    }

    fn value_at(&self, k: T::Difference) -> T {
        match T::narrow(self.front + k * self.step) {
            Some(value) => value,
            None => crate::not_reachable!(),
        }
    }
}

impl<T: RangeInteger> Iterator for RangeIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining.is_zero() {
            return None;
        }
        let value = self.value_at(T::Difference::zero());
        self.front = self.front + self.step;
        self.remaining = self.remaining - T::Difference::one();
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        match <T::Difference as NumCast>::from(n) {
            Some(skip) if skip < self.remaining => {
                self.front = self.front + skip * self.step;
                self.remaining = self.remaining - skip;
                self.next()
            }
            _ => {
                self.remaining = T::Difference::zero();
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: RangeInteger> DoubleEndedIterator for RangeIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.remaining.is_zero() {
            return None;
        }
        self.remaining = self.remaining - T::Difference::one();
        Some(self.value_at(self.remaining))
    }
}

impl<T: RangeInteger> ExactSizeIterator for RangeIter<T> {}

impl<T: RangeInteger> FusedIterator for RangeIter<T> {}
