// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy arithmetic progressions.
//!
//! `Range::new(begin, end, step)` describes `begin, begin + step, ...` up to
//! but excluding `end`, without storing any of it. The step may be negative
//! for signed types, and the span need not be a multiple of the step:
//!
//! ```
//! use lockstep::Range;
//!
//! let down: Vec<i32> = Range::new(5, 2, -1).into_iter().collect();
//! assert_eq!(down, vec![5, 4, 3]);
//!
//! let odd: Vec<u32> = Range::new(1, 10, 4).into_iter().collect();
//! assert_eq!(odd, vec![1, 5, 9]);
//! ```
//!
//! # Construction contract
//!
//! When `begin != end` the step must be nonzero and point from `begin`
//! toward `end`. A range that could never reach its bound is a precondition
//! violation, not an endless loop. An empty range (`begin == end`) accepts
//! any step, including zero.
//!
//! # End cursor
//!
//! [`Sequence::end`] does not return a cursor at the raw `end` value. It
//! returns the first position at or beyond `end` along the step, so for
//! `Range::new(1, 10, 4)` the end cursor sits at `13`. That keeps
//! `end() - begin()` equal to the number of visited values and lets cursor
//! equality terminate every traversal.

mod cursor;
mod integer;
mod iter;

pub use cursor::RangeCursor;
pub use integer::RangeInteger;
pub use iter::RangeIter;

use crate::cursor::{difference, Sequence};
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;

/// An immutable `(begin, end, step)` progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T: RangeInteger> {
    begin: T,
    end: T,
    step: T,
}

/// Why a `(begin, end, step)` triple cannot form a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `step == 0` with `begin != end`.
    ZeroStep,
    /// `step` points away from `end`.
    WrongDirection { begin: i128, end: i128, step: i128 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::ZeroStep => write!(f, "step is zero but begin != end"),
            RangeError::WrongDirection { begin, end, step } => {
                write!(
                    f,
                    "step {} never reaches {} from {}",
                    step, end, begin
                )
            }
        }
    }
}

impl std::error::Error for RangeError {}

impl<T: RangeInteger> Range<T> {
    /// Build a range, failing a precondition on a zero or misdirected step.
    pub fn new(begin: T, end: T, step: T) -> Self {
        if begin != end {
            crate::require!(!step.is_zero());
            crate::require!((begin < end) == (step > T::zero()));
        }
        Self { begin, end, step }
    }

    /// `0, 1, ..., end - 1`.
    pub fn to(end: T) -> Self {
        Self::new(T::zero(), end, T::one())
    }

    /// Build a range, reporting a bad step as a value.
    pub fn try_new(begin: T, end: T, step: T) -> Result<Self, RangeError> {
        if begin != end {
            if step.is_zero() {
                return Err(RangeError::ZeroStep);
            }
            if (begin < end) != (step > T::zero()) {
                return Err(RangeError::WrongDirection {
                    begin: to_i128(begin),
                    end: to_i128(end),
                    step: to_i128(step),
                });
            }
        }
        Ok(Self { begin, end, step })
    }

    pub fn begin_value(&self) -> T {
        self.begin
    }

    /// The bound as given, not the normalized end position.
    pub fn end_value(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Number of values visited, `ceil((end - begin) / step)`.
    pub(crate) fn count(&self) -> T::Difference {
        let span = self.end.widen() - self.begin.widen();
        if span.is_zero() {
            return span;
        }
        let step = self.step.widen();
        let count = (span + step - step.signum()) / step;
        crate::ensure!(count > T::Difference::zero());
        count
    }

    /// Number of values visited.
    pub fn len(&self) -> usize {
        let len = self.count().to_usize();
        crate::require!(len.is_some());
        len.unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `value` is one of the visited values.
    pub fn contains(&self, value: T) -> bool {
        if self.is_empty() {
            return false;
        }
        let offset = value.widen() - self.begin.widen();
        let step = self.step.widen();
        offset.signum() != -step.signum()
            && (offset % step).is_zero()
            && offset / step < self.count()
    }

    /// Iterate the values, also available through `IntoIterator`.
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self)
    }
}

fn to_i128<T: RangeInteger>(value: T) -> i128 {
    difference::widen(value.widen())
}

impl<T: RangeInteger> Sequence for Range<T> {
    type Cursor = RangeCursor<T>;

    fn begin(&self) -> RangeCursor<T> {
        RangeCursor::new(self.begin, self.step)
    }

    fn end(&self) -> RangeCursor<T> {
        let step = self.step.widen();
        RangeCursor::from_wide(self.begin.widen() + self.count() * step, step)
    }
}

impl<T: RangeInteger> Sequence for &Range<T> {
    type Cursor = RangeCursor<T>;

    fn begin(&self) -> RangeCursor<T> {
        (**self).begin()
    }

    fn end(&self) -> RangeCursor<T> {
        (**self).end()
    }
}

impl<T: RangeInteger> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> RangeIter<T> {
        RangeIter::new(&self)
    }
}

impl<T: RangeInteger> IntoIterator for &Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> RangeIter<T> {
        RangeIter::new(self)
    }
}

impl<T: RangeInteger> TryFrom<std::ops::Range<T>> for Range<T> {
    type Error = RangeError;

    fn try_from(r: std::ops::Range<T>) -> Result<Self, RangeError> {
        Self::try_new(r.start, r.end, T::one())
    }
}

/// Shorthand for [`Range::new`].
pub fn range<T: RangeInteger>(begin: T, end: T, step: T) -> Range<T> {
    Range::new(begin, end, step)
}

/// Shorthand for [`Range::to`].
pub fn range_to<T: RangeInteger>(end: T) -> Range<T> {
    Range::to(end)
}
