// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward-only sequences over any cloneable standard iterator.

use super::{Cursor, Forward, Sequence};
use std::fmt;

/// A sequence backed by a cloneable iterator.
///
/// Every traversal clones the stored iterator, so the sequence can be walked
/// repeatedly as long as the iterator itself is restartable by cloning.
#[derive(Debug, Clone)]
pub struct ForwardSeq<I> {
    iter: I,
}

/// Wrap anything iterable as a forward-only sequence.
pub fn forward<I>(iterable: I) -> ForwardSeq<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    ForwardSeq {
        iter: iterable.into_iter(),
    }
}

/// Cursor over a [`ForwardSeq`].
///
/// Holds the element under the cursor plus the rest of the iterator. Two
/// cursors are equal when both are exhausted, or both sit on the same index.
pub struct ForwardCursor<I: Iterator> {
    rest: I,
    head: Option<I::Item>,
    pos: usize,
}

impl<I> Clone for ForwardCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            head: self.head.clone(),
            pos: self.pos,
        }
    }
}

impl<I: Iterator> fmt::Debug for ForwardCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardCursor")
            .field("pos", &self.pos)
            .field("exhausted", &self.head.is_none())
            .finish()
    }
}

impl<I: Iterator> PartialEq for ForwardCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(_), Some(_)) => self.pos == other.pos,
            _ => false,
        }
    }
}

impl<I> Cursor for ForwardCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    type Value = I::Item;
    type Difference = isize;
    type Category = Forward;

    fn get(&self) -> I::Item {
        crate::require!(self.head.is_some());
        match &self.head {
            Some(item) => item.clone(),
            None => crate::not_reachable!(),
        }
    }

    fn advance(&mut self) {
        crate::require!(self.head.is_some());
        self.head = self.rest.next();
        self.pos += 1;
    }
}

impl<I> Sequence for ForwardSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = ForwardCursor<I>;

    fn begin(&self) -> Self::Cursor {
        let mut rest = self.iter.clone();
        let head = rest.next();
        ForwardCursor { rest, head, pos: 0 }
    }

    fn end(&self) -> Self::Cursor {
        ForwardCursor {
            rest: self.iter.clone(),
            head: None,
            pos: usize::MAX,
        }
    }
}

impl<'a, I> Sequence for &'a ForwardSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = ForwardCursor<I>;

    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor {
        (**self).end()
    }
}
