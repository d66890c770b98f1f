// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lock-step cursor.
//!
//! # Anchoring
//!
//! Equality, ordering and distance look at the *first* member only. That is
//! sound while every member has been moved by the same amount, which is the
//! only way a zip cursor moves. When checks are on, every comparison also
//! verifies the other members agree, so a zip whose members drifted apart
//! (unequal lengths compared with `==`, a member moved through
//! [`ZipCursor::member_mut`]) fails an intermediate check instead of
//! silently comparing equal.
//!
//! Traversal is not anchored: [`Cursor::reached`] is true as soon as *any*
//! member reaches its end, which is what makes the shortest sequence win.

use super::traits::{BidirectionalCursorTuple, CursorTuple, Member, RandomAccessCursorTuple};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A tuple of cursors advanced together.
#[derive(Debug, Clone, Copy)]
pub struct ZipCursor<T> {
    cursors: T,
}

impl<T: CursorTuple> ZipCursor<T> {
    pub fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// All member cursors.
    pub fn members(&self) -> &T {
        &self.cursors
    }

    /// All member cursors, mutably. Moving one member on its own breaks the
    /// lock-step assumption behind comparisons.
    pub fn members_mut(&mut self) -> &mut T {
        &mut self.cursors
    }

    pub fn into_members(self) -> T {
        self.cursors
    }

    /// The `N`th member cursor.
    pub fn member<const N: usize>(&self) -> &<T as Member<N>>::Output
    where
        T: Member<N>,
    {
        self.cursors.member()
    }

    /// The `N`th member cursor, mutably.
    pub fn member_mut<const N: usize>(&mut self) -> &mut <T as Member<N>>::Output
    where
        T: Member<N>,
    {
        self.cursors.member_mut()
    }

    pub const fn arity() -> usize {
        T::ARITY
    }
}

impl<T: CursorTuple> PartialEq for ZipCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        let equal = self.cursors.first() == other.cursors.first();
        if equal {
            crate::check!(self.cursors.all_eq(&other.cursors));
        }
        equal
    }
}

impl<T: RandomAccessCursorTuple> PartialOrd for ZipCursor<T>
where
    T::First: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = self.cursors.first().partial_cmp(other.cursors.first());
        crate::check!(self.cursors.orderings_agree(&other.cursors, ordering));
        ordering
    }
}

impl<T: CursorTuple> Cursor for ZipCursor<T> {
    type Item = T::Item;
    type Value = T::Value;
    type Difference = T::Difference;
    type Category = T::Category;

    #[inline]
    fn get(&self) -> T::Item {
        self.cursors.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursors.advance();
    }

    #[inline]
    fn reached(&self, end: &Self) -> bool {
        self.cursors.any_reached(&end.cursors)
    }

    #[inline]
    fn known_distance_from(&self, origin: &Self) -> Option<T::Difference> {
        self.cursors.known_distance(&origin.cursors)
    }
}

impl<T: BidirectionalCursorTuple> BidirectionalCursor for ZipCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.cursors.retreat();
    }
}

impl<T: RandomAccessCursorTuple> RandomAccessCursor for ZipCursor<T>
where
    T::First: PartialOrd,
{
    #[inline]
    fn jump(&mut self, n: T::Difference) {
        self.cursors.jump(n);
    }

    /// Distance between the first members.
    fn distance_from(&self, origin: &Self) -> T::Difference {
        crate::check!(self.cursors.distances_agree(&origin.cursors));
        self.cursors.first_distance(&origin.cursors)
    }
}

impl<T: RandomAccessCursorTuple> AddAssign<T::Difference> for ZipCursor<T>
where
    T::First: PartialOrd,
{
    fn add_assign(&mut self, n: T::Difference) {
        self.jump(n);
    }
}

impl<T: RandomAccessCursorTuple> SubAssign<T::Difference> for ZipCursor<T>
where
    T::First: PartialOrd,
{
    fn sub_assign(&mut self, n: T::Difference) {
        self.jump_back(n);
    }
}

impl<T: RandomAccessCursorTuple> Add<T::Difference> for ZipCursor<T>
where
    T::First: PartialOrd,
{
    type Output = Self;

    fn add(mut self, n: T::Difference) -> Self {
        self += n;
        self
    }
}

impl<T: RandomAccessCursorTuple> Sub<T::Difference> for ZipCursor<T>
where
    T::First: PartialOrd,
{
    type Output = Self;

    fn sub(mut self, n: T::Difference) -> Self {
        self -= n;
        self
    }
}
