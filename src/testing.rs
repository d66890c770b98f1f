// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::contracts::{catch_violation, Violation};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, Sequence};

/// Run `f` and return the violation it raised.
///
/// Panics if `f` completes normally.
pub fn expect_violation<R>(f: impl FnOnce() -> R) -> Violation {
    match catch_violation(f) {
        Ok(_) => panic!("expected a contract violation"),
        Err(violation) => violation,
    }
}

/// Every item of a sequence, front to back.
pub fn collect<S: Sequence>(seq: &S) -> Vec<<S::Cursor as Cursor>::Item> {
    seq.walk().collect()
}

/// Every item of a sequence, back to front, by retreating from `end()`.
pub fn collect_backwards<S>(seq: &S) -> Vec<<S::Cursor as Cursor>::Item>
where
    S: Sequence,
    S::Cursor: BidirectionalCursor,
{
    let begin = seq.begin();
    let mut cursor = seq.end();
    let mut items = Vec::new();
    while cursor != begin {
        cursor.retreat();
        items.push(cursor.get());
    }
    items
}

/// Every item of a sequence, read by index from `begin()`.
pub fn collect_indexed<S>(seq: &S) -> Vec<<S::Cursor as Cursor>::Item>
where
    S: Sequence,
    S::Cursor: RandomAccessCursor,
{
    let begin = seq.begin();
    let len = seq.end().distance_from(&begin);
    let mut items = Vec::new();
    let mut k = num_traits::Zero::zero();
    while k < len {
        items.push(begin.at(k));
        k = k + num_traits::One::one();
    }
    items
}
