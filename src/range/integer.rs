// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer types a range can count in, and their wide position types.

use crate::cursor::DifferenceType;
use num_traits::PrimInt;
use std::fmt;

/// An integral type usable as range values.
///
/// Positions are stored in `Difference`, a signed type wider than `Self`, so
/// a past-the-end position beyond `Self::MAX` (or below zero for unsigned
/// types) is still representable while nothing dereferences it.
pub trait RangeInteger: PrimInt + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Signed type wide enough for any span or position of `Self`.
    type Difference: DifferenceType;

    /// Whether negative values (and negative steps) exist.
    const SIGNED: bool;

    /// Lossless conversion into the wide type.
    fn widen(self) -> Self::Difference;

    /// Conversion back, `None` outside `Self`'s domain.
    fn narrow(wide: Self::Difference) -> Option<Self>;
}

macro_rules! range_integer_impl {
    ($($t:ty => $wide:ty, $signed:expr;)+) => {
        $(
            impl RangeInteger for $t {
                type Difference = $wide;
                const SIGNED: bool = $signed;

                #[inline(always)]
                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }

                #[inline(always)]
                fn narrow(wide: $wide) -> Option<$t> {
                    <$t>::try_from(wide).ok()
                }
            }
        )+
    };
}

range_integer_impl! {
    i8 => i16, true;
    u8 => i16, false;
    i16 => i32, true;
    u16 => i32, false;
    i32 => i64, true;
    u32 => i64, false;
    i64 => i128, true;
    u64 => i128, false;
}

// No `From<isize>`/`From<usize>` for `i128` in std.
impl RangeInteger for isize {
    type Difference = i128;
    const SIGNED: bool = true;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }

    #[inline(always)]
    fn narrow(wide: i128) -> Option<isize> {
        isize::try_from(wide).ok()
    }
}

impl RangeInteger for usize {
    type Difference = i128;
    const SIGNED: bool = false;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }

    #[inline(always)]
    fn narrow(wide: i128) -> Option<usize> {
        usize::try_from(wide).ok()
    }
}
