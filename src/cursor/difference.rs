// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Signed distance types and their pairwise widening.
//!
//! Every cursor reports distances in a signed integer type. When cursors are
//! composed, the composite distance type is the narrowest signed type that
//! holds every member's distance type. Like categories, this is a total
//! type-level function ([`DifferenceType::Widen`]) so no combination of
//! members can fail to produce a composite type.
//!
//! `isize` is platform sized, so it ranks with `i64` but only wins against
//! types strictly narrower than itself:
//!
//! ```text
//! Widen   i8     i16    i32    isize  i64   i128
//! i8      i8     i16    i32    isize  i64   i128
//! i16     i16    i16    i32    isize  i64   i128
//! i32     i32    i32    i32    isize  i64   i128
//! isize   isize  isize  isize  isize  i64   i128
//! i64     i64    i64    i64    i64    i64   i128
//! i128    i128   i128   i128   i128   i128  i128
//! ```

use num_traits::{NumCast, PrimInt, Signed};
use std::fmt;

/// A signed integer usable as a cursor distance.
pub trait DifferenceType:
    PrimInt + Signed + NumCast + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// `Self` widened to at least 16 bits.
    type AtLeast16: DifferenceType;
    /// `Self` widened to at least 32 bits.
    type AtLeast32: DifferenceType;
    /// `Self` widened to at least `isize`.
    type AtLeastIsize: DifferenceType;
    /// `Self` widened to at least 64 bits.
    type AtLeast64: DifferenceType;

    /// The narrowest type holding both `Self` and `Other`.
    type Widen<Other: DifferenceType>: DifferenceType;

    /// Convert from another distance type, `None` when it does not fit.
    #[inline]
    fn convert_from<D: DifferenceType>(value: D) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

impl DifferenceType for i8 {
    type AtLeast16 = i16;
    type AtLeast32 = i32;
    type AtLeastIsize = isize;
    type AtLeast64 = i64;
    type Widen<Other: DifferenceType> = Other;
}

impl DifferenceType for i16 {
    type AtLeast16 = i16;
    type AtLeast32 = i32;
    type AtLeastIsize = isize;
    type AtLeast64 = i64;
    type Widen<Other: DifferenceType> = Other::AtLeast16;
}

impl DifferenceType for i32 {
    type AtLeast16 = i32;
    type AtLeast32 = i32;
    type AtLeastIsize = isize;
    type AtLeast64 = i64;
    type Widen<Other: DifferenceType> = Other::AtLeast32;
}

impl DifferenceType for isize {
    type AtLeast16 = isize;
    type AtLeast32 = isize;
    type AtLeastIsize = isize;
    type AtLeast64 = i64;
    type Widen<Other: DifferenceType> = Other::AtLeastIsize;
}

impl DifferenceType for i64 {
    type AtLeast16 = i64;
    type AtLeast32 = i64;
    type AtLeastIsize = i64;
    type AtLeast64 = i64;
    type Widen<Other: DifferenceType> = Other::AtLeast64;
}

impl DifferenceType for i128 {
    type AtLeast16 = i128;
    type AtLeast32 = i128;
    type AtLeastIsize = i128;
    type AtLeast64 = i128;
    type Widen<Other: DifferenceType> = i128;
}

/// Shorthand for `<A as DifferenceType>::Widen<B>`.
pub type WidenOf<A, B> = <A as DifferenceType>::Widen<B>;

/// Widen a member distance into a composite distance type.
///
/// The composite type is built by [`DifferenceType::Widen`], so the
/// conversion cannot fail for a real member.
#[inline]
pub(crate) fn widen<From: DifferenceType, To: DifferenceType>(value: From) -> To {
    match To::convert_from(value) {
        Some(v) => v,
        None => crate::not_reachable!(),
    }
}

/// Narrow a composite distance into a member's distance type.
#[inline]
pub(crate) fn narrow<From: DifferenceType, To: DifferenceType>(value: From) -> To {
    let converted = To::convert_from(value);
    crate::require!(converted.is_some());
    match converted {
        Some(v) => v,
        None => crate::not_reachable!(),
    }
}
