// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract-checked range, enumerate, and zip adaptors over cursors.
//!
//! Every adaptor here is a *sequence* (something with `begin` and `end`
//! cursors) built from other sequences. Adaptors only ask their members for
//! the cursor capabilities they need, and the operations that would be
//! undefined on a bad combination (mismatched strides, unsigned underflow,
//! jumping a forward-only member) are either rejected by the type system or
//! fenced by a contract check.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        contracts                             │
//! │   require! / check! / ensure!  ─▶  Violation  ─▶  panic      │
//! │   config (dbc feature + LOCKSTEP_DBC, resolved once)         │
//! └─────────────────────────────────────────────────────────────┘
//!        ▲                    ▲                       ▲
//!        │                    │                       │
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   range     │     │  enumerate   │     │       zip        │
//! │ (Range,     │     │ (Enumerate,  │     │ (Zip, ZipCursor, │
//! │ RangeCursor)│     │  index+inner)│     │  CursorTuple)    │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                    │                       │
//!        ▼                    ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         cursor                               │
//! │  Cursor ◀─ BidirectionalCursor ◀─ RandomAccessCursor         │
//! │  Sequence, Walk, Category::Meet, DifferenceType::Widen       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lockstep::{enumerate_from, zip, Range};
//!
//! let names = ["ada", "grace", "edsger"];
//! let years = [1815, 1906, 1930];
//!
//! let rows: Vec<_> = zip!(enumerate_from(&names, 1u8), &years, Range::new(10, 0, -5))
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(rows, vec![((1, &"ada"), &1815, 10), ((2, &"grace"), &1906, 5)]);
//! ```
//!
//! # Checks
//!
//! | Switch                     | Effect                                      |
//! |----------------------------|---------------------------------------------|
//! | `dbc` feature (default on) | compile the checks in                       |
//! | `LOCKSTEP_DBC=off`         | skip them for this process                  |
//! | `contracts::config::install` | choose for this process, before first use |
//!
//! See [`contracts`] for what a failed check looks like.

pub mod contracts;
pub mod cursor;
pub mod enumerate;
pub mod range;
pub mod zip;

#[doc(hidden)]
pub mod testing;

pub use contracts::{catch_violation, install_panic_hook, ContractKind, Violation};
pub use cursor::{
    cells, forward, BidirectionalCursor, CategoryKind, Cursor, RandomAccessCursor, Sequence,
    Walk,
};
pub use enumerate::{enumerate, enumerate_from, Enumerate, EnumerateCursor};
pub use range::{range, range_to, Range, RangeCursor, RangeError, RangeInteger, RangeIter};
pub use zip::{zip, Zip, ZipCursor};
