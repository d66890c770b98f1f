// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type composition over tuples of cursors.
//!
//! For a tuple `(C0, ..., Cn)` the composed properties are computed by
//! pairwise reduction, right to left:
//!
//! | Property     | One member       | Two or more members                      |
//! |--------------|------------------|------------------------------------------|
//! | `Item`       | `C0::Item`       | `(C0::Item, ..., Cn::Item)`              |
//! | `Value`      | `C0::Value`      | `(C0::Value, ..., Cn::Value)`            |
//! | `Difference` | `C0::Difference` | `WidenOf<C0::Difference, WidenOf<...>>`  |
//! | `Category`   | `C0::Category`   | `MeetOf<C0::Category, MeetOf<...>>`      |
//!
//! A single member passes through unwrapped; there is no one-element tuple
//! item. Capabilities follow the members: a tuple implements
//! [`BidirectionalCursorTuple`] or [`RandomAccessCursorTuple`] only when every
//! member implements the matching cursor trait.

use crate::cursor::category::MeetOf;
use crate::cursor::difference::{self, WidenOf};
use crate::cursor::{
    BidirectionalCursor, Category, Cursor, DifferenceType, RandomAccessCursor, Sequence,
};
use std::cmp::Ordering;

/// A tuple of cursors moved in lock-step.
pub trait CursorTuple: Clone {
    type Item;
    type Value;
    type Difference: DifferenceType;
    type Category: Category;
    /// The member that anchors equality, ordering and distance.
    type First: Cursor;

    const ARITY: usize;

    fn first(&self) -> &Self::First;

    /// Read every member.
    fn get(&self) -> Self::Item;

    /// Advance every member.
    fn advance(&mut self);

    /// Whether any member reached its counterpart in `end`.
    fn any_reached(&self, end: &Self) -> bool;

    /// Whether every member equals its counterpart.
    fn all_eq(&self, other: &Self) -> bool;

    /// The distance from `origin`, when every member knows it and they agree.
    fn known_distance(&self, origin: &Self) -> Option<Self::Difference>;
}

/// A cursor tuple whose members all step backwards.
pub trait BidirectionalCursorTuple: CursorTuple {
    fn retreat(&mut self);
}

/// A cursor tuple whose members are all random access.
pub trait RandomAccessCursorTuple: BidirectionalCursorTuple {
    /// Jump every member by `n`, narrowed to each member's distance type.
    fn jump(&mut self, n: Self::Difference);

    /// Distance between the first members, widened.
    fn first_distance(&self, origin: &Self) -> Self::Difference;

    /// Whether every member is `first_distance` away from its counterpart.
    fn distances_agree(&self, origin: &Self) -> bool;

    /// Whether every member orders against its counterpart as `ordering`.
    fn orderings_agree(&self, other: &Self, ordering: Option<Ordering>) -> bool;
}

/// A tuple of sequences zipped together.
pub trait SequenceTuple {
    type Cursors: CursorTuple;

    fn begins(&self) -> Self::Cursors;

    fn ends(&self) -> Self::Cursors;
}

/// Positional access to the `N`th member of a tuple.
pub trait Member<const N: usize> {
    type Output;

    fn member(&self) -> &Self::Output;

    fn member_mut(&mut self) -> &mut Self::Output;
}

// ============================================================================
// TYPE REDUCTIONS
// ============================================================================

macro_rules! widen_all {
    ($last:ty) => { $last };
    ($head:ty, $($rest:ty),+) => { WidenOf<$head, widen_all!($($rest),+)> };
}

macro_rules! meet_all {
    ($last:ty) => { $last };
    ($head:ty, $($rest:ty),+) => { MeetOf<$head, meet_all!($($rest),+)> };
}

// ============================================================================
// ONE MEMBER
// ============================================================================

impl<C0: Cursor> CursorTuple for (C0,) {
    type Item = C0::Item;
    type Value = C0::Value;
    type Difference = C0::Difference;
    type Category = C0::Category;
    type First = C0;

    const ARITY: usize = 1;

    #[inline]
    fn first(&self) -> &C0 {
        &self.0
    }

    #[inline]
    fn get(&self) -> C0::Item {
        self.0.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance();
    }

    #[inline]
    fn any_reached(&self, end: &Self) -> bool {
        self.0.reached(&end.0)
    }

    #[inline]
    fn all_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    #[inline]
    fn known_distance(&self, origin: &Self) -> Option<C0::Difference> {
        self.0.known_distance_from(&origin.0)
    }
}

impl<C0: BidirectionalCursor> BidirectionalCursorTuple for (C0,) {
    #[inline]
    fn retreat(&mut self) {
        self.0.retreat();
    }
}

impl<C0: RandomAccessCursor> RandomAccessCursorTuple for (C0,) {
    #[inline]
    fn jump(&mut self, n: C0::Difference) {
        self.0.jump(n);
    }

    #[inline]
    fn first_distance(&self, origin: &Self) -> C0::Difference {
        self.0.distance_from(&origin.0)
    }

    #[inline]
    fn distances_agree(&self, _origin: &Self) -> bool {
        true
    }

    #[inline]
    fn orderings_agree(&self, other: &Self, ordering: Option<Ordering>) -> bool {
        self.0.partial_cmp(&other.0) == ordering
    }
}

impl<S0: Sequence> SequenceTuple for (S0,) {
    type Cursors = (S0::Cursor,);

    fn begins(&self) -> Self::Cursors {
        (self.0.begin(),)
    }

    fn ends(&self) -> Self::Cursors {
        (self.0.end(),)
    }
}

// ============================================================================
// TWO OR MORE MEMBERS
// ============================================================================

macro_rules! tuple_impls {
    ($arity:expr; ($c0:ident $s0:ident $i0:tt) $(($c:ident $s:ident $i:tt))+) => {
        impl<$c0: Cursor, $($c: Cursor),+> CursorTuple for ($c0, $($c,)+) {
            type Item = ($c0::Item, $($c::Item,)+);
            type Value = ($c0::Value, $($c::Value,)+);
            type Difference = widen_all!($c0::Difference $(, $c::Difference)+);
            type Category = meet_all!($c0::Category $(, $c::Category)+);
            type First = $c0;

            const ARITY: usize = $arity;

            #[inline]
            fn first(&self) -> &$c0 {
                &self.$i0
            }

            #[inline]
            fn get(&self) -> Self::Item {
                (self.$i0.get(), $(self.$i.get(),)+)
            }

            #[inline]
            fn advance(&mut self) {
                self.$i0.advance();
                $(self.$i.advance();)+
            }

            #[inline]
            fn any_reached(&self, end: &Self) -> bool {
                self.$i0.reached(&end.$i0) $(|| self.$i.reached(&end.$i))+
            }

            #[inline]
            fn all_eq(&self, other: &Self) -> bool {
                self.$i0 == other.$i0 $(&& self.$i == other.$i)+
            }

            fn known_distance(&self, origin: &Self) -> Option<Self::Difference> {
                let first: Self::Difference =
                    difference::widen(self.$i0.known_distance_from(&origin.$i0)?);
                $(
                    let member: Self::Difference =
                        difference::widen(self.$i.known_distance_from(&origin.$i)?);
                    if member != first {
                        return None;
                    }
                )+
                Some(first)
            }
        }

        impl<$c0: BidirectionalCursor, $($c: BidirectionalCursor),+> BidirectionalCursorTuple
            for ($c0, $($c,)+)
        {
            #[inline]
            fn retreat(&mut self) {
                self.$i0.retreat();
                $(self.$i.retreat();)+
            }
        }

        impl<$c0: RandomAccessCursor, $($c: RandomAccessCursor),+> RandomAccessCursorTuple
            for ($c0, $($c,)+)
        {
            /// Every member's distance is narrowed before any member moves.
            #[inline]
            fn jump(&mut self, n: Self::Difference) {
                let steps = (
                    difference::narrow::<_, $c0::Difference>(n),
                    $(difference::narrow::<_, $c::Difference>(n),)+
                );
                self.$i0.jump(steps.$i0);
                $(self.$i.jump(steps.$i);)+
            }

            #[inline]
            fn first_distance(&self, origin: &Self) -> Self::Difference {
                difference::widen(self.$i0.distance_from(&origin.$i0))
            }

            fn distances_agree(&self, origin: &Self) -> bool {
                let first = self.first_distance(origin);
                true $(&& difference::widen::<_, Self::Difference>(
                    self.$i.distance_from(&origin.$i),
                ) == first)+
            }

            fn orderings_agree(&self, other: &Self, ordering: Option<Ordering>) -> bool {
                self.$i0.partial_cmp(&other.$i0) == ordering
                    $(&& self.$i.partial_cmp(&other.$i) == ordering)+
            }
        }

        impl<$s0: Sequence, $($s: Sequence),+> SequenceTuple for ($s0, $($s,)+) {
            type Cursors = ($s0::Cursor, $($s::Cursor,)+);

            fn begins(&self) -> Self::Cursors {
                (self.$i0.begin(), $(self.$i.begin(),)+)
            }

            fn ends(&self) -> Self::Cursors {
                (self.$i0.end(), $(self.$i.end(),)+)
            }
        }

        member_impls!(($c0 $(, $c)+); ($c0 $i0) $(($c $i))+);
    };
}

macro_rules! member_impls {
    (@one ($($all:ident),+); $t:ident $i:tt) => {
        impl<$($all),+> Member<$i> for ($($all,)+) {
            type Output = $t;

            #[inline]
            fn member(&self) -> &$t {
                &self.$i
            }

            #[inline]
            fn member_mut(&mut self) -> &mut $t {
                &mut self.$i
            }
        }
    };
    ($all:tt; $(($t:ident $i:tt))+) => {
        $(member_impls!(@one $all; $t $i);)+
    };
}

member_impls!((C0); (C0 0));

tuple_impls!(2; (C0 S0 0) (C1 S1 1));
tuple_impls!(3; (C0 S0 0) (C1 S1 1) (C2 S2 2));
tuple_impls!(4; (C0 S0 0) (C1 S1 1) (C2 S2 2) (C3 S3 3));
tuple_impls!(5; (C0 S0 0) (C1 S1 1) (C2 S2 2) (C3 S3 3) (C4 S4 4));
tuple_impls!(6; (C0 S0 0) (C1 S1 1) (C2 S2 2) (C3 S3 3) (C4 S4 4) (C5 S5 5));
tuple_impls!(7; (C0 S0 0) (C1 S1 1) (C2 S2 2) (C3 S3 3) (C4 S4 4) (C5 S5 5) (C6 S6 6));
tuple_impls!(8; (C0 S0 0) (C1 S1 1) (C2 S2 2) (C3 S3 3) (C4 S4 4) (C5 S5 5) (C6 S6 6) (C7 S7 7));
