// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursor over an arithmetic progression.
//!
//! A `RangeCursor` is a `(value, step)` pair. Two cursors are equal only when
//! both parts match, so a cursor built with a different step never equals
//! the end of a range; ordering and distance *require* equal steps.
//!
//! # Contracts
//!
//! | Operation                | Precondition                                    |
//! |--------------------------|-------------------------------------------------|
//! | `get` / `value`          | value lies inside `T`'s domain                  |
//! | `retreat`                | `T` is signed, or `value >= step`               |
//! | `jump(n)`                | `n * step` and the result do not overflow, and  |
//! |                          | an unsigned `T` does not go below zero          |
//! | `distance_from`, `<` ... | both cursors share a step                       |
//! | `sum`                    | both cursors share a step                       |
//!
//! Jumps take integral distances only, so the "distance must be finite"
//! requirement holds by construction.

use super::RangeInteger;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccess, RandomAccessCursor};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Position within a [`Range`](super::Range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeCursor<T: RangeInteger> {
    value: T::Difference,
    step: T::Difference,
    _marker: PhantomData<T>,
}

impl<T: RangeInteger> RangeCursor<T> {
    /// Create a cursor at `value` moving by `step`.
    pub fn new(value: T, step: T) -> Self {
        Self::from_wide(value.widen(), step.widen())
    }

    pub(crate) fn from_wide(value: T::Difference, step: T::Difference) -> Self {
        Self {
            value,
            step,
            _marker: PhantomData,
        }
    }

    /// The value under the cursor.
    #[inline]
    pub fn value(&self) -> T {
        let value = T::narrow(self.value);
        crate::require!(value.is_some());
        match value {
            Some(v) => v,
            None => crate::not_reachable!(),
        }
    }

    /// The step length.
    #[inline]
    pub fn step(&self) -> T {
        match T::narrow(self.step) {
            Some(step) => step,
            None => crate::not_reachable!(),
        }
    }

    /// The position in the wide type; defined even past the end of `T`.
    #[inline]
    pub fn wide_value(&self) -> T::Difference {
        self.value
    }

    /// Cursor at the sum of both values, sharing their step.
    pub fn sum(&self, other: &Self) -> Self {
        crate::require!(self.step == other.step);
        let value = self.value.checked_add(&other.value);
        crate::require!(value.is_some());
        Self::from_wide(value.unwrap_or(self.value), self.step)
    }

    fn move_to(&mut self, target: Option<T::Difference>) {
        crate::require!(target.is_some());
        if let Some(target) = target {
            crate::require!(T::SIGNED || target >= T::Difference::zero());
            self.value = target;
        }
    }
}

impl<T: RangeInteger> PartialOrd for RangeCursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        crate::require!(self.step == other.step);
        Some(self.value.cmp(&other.value))
    }
}

impl<T: RangeInteger> Cursor for RangeCursor<T> {
    type Item = T;
    type Value = T;
    type Difference = T::Difference;
    type Category = RandomAccess;

    #[inline]
    fn get(&self) -> T {
        self.value()
    }

    #[inline]
    fn advance(&mut self) {
        let target = self.value.checked_add(&self.step);
        self.move_to(target);
    }

    #[inline]
    fn known_distance_from(&self, origin: &Self) -> Option<T::Difference> {
        Some(self.distance_from(origin))
    }
}

impl<T: RangeInteger> BidirectionalCursor for RangeCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        crate::require!(T::SIGNED || self.value >= self.step);
        let target = self.value.checked_sub(&self.step);
        self.move_to(target);
    }
}

impl<T: RangeInteger> RandomAccessCursor for RangeCursor<T> {
    #[inline]
    fn jump(&mut self, n: T::Difference) {
        let target = n
            .checked_mul(&self.step)
            .and_then(|delta| self.value.checked_add(&delta));
        self.move_to(target);
    }

    /// `(self.value - origin.value) / step`.
    ///
    /// An empty range may carry a zero step; its only two cursors are
    /// equal and sit zero positions apart.
    fn distance_from(&self, origin: &Self) -> T::Difference {
        crate::require!(self.step == origin.step);
        let span = self.value - origin.value;
        if self.step.is_zero() {
            crate::require!(span.is_zero());
            return span;
        }
        span / self.step
    }
}

macro_rules! range_cursor_ops {
    ($($t:ty => $wide:ty),+ $(,)?) => {
        $(
            impl AddAssign<$wide> for RangeCursor<$t> {
                #[inline]
                fn add_assign(&mut self, n: $wide) {
                    self.jump(n);
                }
            }

            impl SubAssign<$wide> for RangeCursor<$t> {
                #[inline]
                fn sub_assign(&mut self, n: $wide) {
                    self.jump_back(n);
                }
            }

            impl Add<$wide> for RangeCursor<$t> {
                type Output = Self;

                #[inline]
                fn add(mut self, n: $wide) -> Self {
                    self += n;
                    self
                }
            }

            impl Add<RangeCursor<$t>> for $wide {
                type Output = RangeCursor<$t>;

                #[inline]
                fn add(self, cursor: RangeCursor<$t>) -> RangeCursor<$t> {
                    cursor + self
                }
            }

            impl Sub<$wide> for RangeCursor<$t> {
                type Output = Self;

                #[inline]
                fn sub(mut self, n: $wide) -> Self {
                    self -= n;
                    self
                }
            }

            impl Sub for RangeCursor<$t> {
                type Output = $wide;

                #[inline]
                fn sub(self, origin: Self) -> Self::Output {
                    self.distance_from(&origin)
                }
            }

            impl Add for RangeCursor<$t> {
                type Output = Self;

                #[inline]
                fn add(self, other: Self) -> Self {
                    self.sum(&other)
                }
            }
        )+
    };
}

range_cursor_ops!(
    i8 => i16,
    u8 => i16,
    i16 => i32,
    u16 => i32,
    i32 => i64,
    u32 => i64,
    i64 => i128,
    u64 => i128,
    isize => i128,
    usize => i128,
);
