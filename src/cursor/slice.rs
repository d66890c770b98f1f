// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursors over borrowed slices.
//!
//! Reading yields `&'a T`. For sequences that must be written through an
//! adaptor, view the storage as cells first ([`cells`]); the cursor then
//! yields `&'a Cell<T>` and writes land in the original slice.

use super::{BidirectionalCursor, Cursor, RandomAccess, RandomAccessCursor, Sequence};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

/// A position within a borrowed slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Create a cursor at `pos`, which may be one past the last element.
    pub fn new(slice: &'a [T], pos: usize) -> Self {
        crate::require!(pos <= slice.len());
        Self { slice, pos }
    }

    /// Index of the cursor within its slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn same_slice(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice)
    }
}

/// View a mutable slice as a slice of cells so adaptors can write through it.
pub fn cells<T>(slice: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(slice).as_slice_of_cells()
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        crate::require!(self.same_slice(other));
        Some(self.pos.cmp(&other.pos))
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;
    type Value = T;
    type Difference = isize;
    type Category = RandomAccess;

    #[inline]
    fn get(&self) -> &'a T {
        crate::require!(self.pos < self.slice.len());
        let slice: &'a [T] = self.slice;
        &slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        crate::require!(self.pos < self.slice.len());
        self.pos += 1;
    }

    #[inline]
    fn known_distance_from(&self, origin: &Self) -> Option<isize> {
        Some(self.distance_from(origin))
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        crate::require!(self.pos > 0);
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        let target = self.pos.checked_add_signed(n);
        crate::require!(matches!(target, Some(t) if t <= self.slice.len()));
        if let Some(target) = target {
            self.pos = target;
        }
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        crate::require!(self.same_slice(origin));
        self.pos as isize - origin.pos as isize
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, self.len())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, N)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        let vec: &'a Vec<T> = *self;
        SliceCursor::new(vec.as_slice(), 0)
    }

    fn end(&self) -> Self::Cursor {
        let vec: &'a Vec<T> = *self;
        SliceCursor::new(vec.as_slice(), vec.len())
    }
}
