// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for lockstep's range arithmetic.
//!
//! This standalone crate extracts the position math behind `Range` (value
//! count, normalized end, membership) for `i32` and `u8`, and proves it over
//! every valid `(begin, end, step)` triple.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: counting and normalizing never overflow the wide type
//! 2. **End placement**: the normalized end is the first progression value at
//!    or past the bound, never more than one step beyond it
//! 3. **Last value fits**: the final visited value is representable in the
//!    narrow type, even when the normalized end is not
//! 4. **Membership**: `contains` accepts exactly the progression values

// ============================================================================
// RANGE ARITHMETIC (mirrors src/range/mod.rs, widened by hand)
// ============================================================================

/// A direction-consistent triple; empty ranges accept any step.
pub fn is_valid_i32(begin: i32, end: i32, step: i32) -> bool {
    begin == end || (step != 0 && (begin < end) == (step > 0))
}

/// Number of visited values, `ceil((end - begin) / step)`.
pub fn count_i32(begin: i32, end: i32, step: i32) -> i64 {
    let span = i64::from(end) - i64::from(begin);
    if span == 0 {
        return 0;
    }
    let step = i64::from(step);
    (span + step - step.signum()) / step
}

/// `begin + count * step`, the position the end cursor sits at.
pub fn normalized_end_i32(begin: i32, end: i32, step: i32) -> i64 {
    i64::from(begin) + count_i32(begin, end, step) * i64::from(step)
}

pub fn contains_i32(begin: i32, end: i32, step: i32, value: i32) -> bool {
    if begin == end {
        return false;
    }
    let offset = i64::from(value) - i64::from(begin);
    let step = i64::from(step);
    offset.signum() != -step.signum()
        && offset % step == 0
        && offset / step < count_i32(begin, end, step as i32)
}

/// Unsigned ranges only step upward.
pub fn count_u8(begin: u8, end: u8, step: u8) -> i16 {
    let span = i16::from(end) - i16::from(begin);
    if span == 0 {
        return 0;
    }
    let step = i16::from(step);
    (span + step - 1) / step
}

pub fn normalized_end_u8(begin: u8, end: u8, step: u8) -> i16 {
    i16::from(begin) + count_u8(begin, end, step) * i16::from(step)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_valid_i32() -> (i32, i32, i32) {
        let begin: i32 = kani::any();
        let end: i32 = kani::any();
        let step: i32 = kani::any();
        kani::assume(is_valid_i32(begin, end, step));
        (begin, end, step)
    }

    /// Verify counting never overflows and is never negative.
    #[kani::proof]
    fn verify_count_no_overflow() {
        let (begin, end, step) = any_valid_i32();
        let count = count_i32(begin, end, step);
        kani::assert(count >= 0, "count must not be negative");
        kani::assert(
            count <= i64::from(u32::MAX),
            "count is bounded by the widest span",
        );
        kani::assert((count == 0) == (begin == end), "only empty ranges count zero");
    }

    /// Verify the normalized end is at most one step past the bound.
    #[kani::proof]
    fn verify_normalized_end_placement() {
        let (begin, end, step) = any_valid_i32();
        kani::assume(begin != end);
        let nend = normalized_end_i32(begin, end, step);
        let (end, step) = (i64::from(end), i64::from(step));
        if step > 0 {
            kani::assert(end <= nend && nend < end + step, "end lands in [end, end + step)");
        } else {
            kani::assert(end + step < nend && nend <= end, "end lands in (end + step, end]");
        }
    }

    /// Verify the last visited value is a real `i32` strictly before the bound.
    #[kani::proof]
    fn verify_last_value_fits() {
        let (begin, end, step) = any_valid_i32();
        kani::assume(begin != end);
        let last = normalized_end_i32(begin, end, step) - i64::from(step);
        kani::assert(i32::try_from(last).is_ok(), "last value must narrow");
        if step > 0 {
            kani::assert(last < i64::from(end), "last value is below the bound");
        } else {
            kani::assert(last > i64::from(end), "last value is above the bound");
        }
    }

    /// Verify `contains` accepts exactly `begin + k * step` for `k < count`.
    #[kani::proof]
    fn verify_contains_matches_progression() {
        let (begin, end, step) = any_valid_i32();
        let value: i32 = kani::any();
        let count = count_i32(begin, end, step);
        if contains_i32(begin, end, step, value) {
            let k = (i64::from(value) - i64::from(begin)) / i64::from(step);
            kani::assert(0 <= k && k < count, "accepted value has an in-range index");
            kani::assert(
                i64::from(begin) + k * i64::from(step) == i64::from(value),
                "accepted value is on the progression",
            );
        }
        if count > 0 {
            kani::assert(contains_i32(begin, end, step, begin), "begin is always visited");
        }
        kani::assert(!contains_i32(begin, end, step, end), "the bound is never visited");
    }

    /// Verify the unsigned end position fits the wide type past `u8::MAX`.
    #[kani::proof]
    fn verify_unsigned_end_past_max() {
        let begin: u8 = kani::any();
        let end: u8 = kani::any();
        let step: u8 = kani::any();
        kani::assume(begin <= end && step > 0);
        let nend = normalized_end_u8(begin, end, step);
        kani::assert(nend >= i16::from(end), "end is at or past the bound");
        kani::assert(nend < i16::from(end) + i16::from(step), "end is within one step");
        if begin != end {
            let last = nend - i16::from(step);
            kani::assert(u8::try_from(last).is_ok(), "last value must narrow");
        }
    }
}
