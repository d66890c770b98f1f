// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursor capability tiers and the "weakest wins" reduction.
//!
//! A category is a zero-sized marker carried as `Cursor::Category`. Composing
//! cursors never upgrades a capability: a zip of a forward and a random-access
//! cursor is only forward. The reduction is a total type-level function,
//! [`Category::Meet`], mirrored at runtime by [`CategoryKind::meet`] so both
//! can be tested against each other.
//!
//! ```text
//!                 Forward   Bidirectional   RandomAccess
//! Forward         Forward   Forward         Forward
//! Bidirectional   Forward   Bidirectional   Bidirectional
//! RandomAccess    Forward   Bidirectional   RandomAccess
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime view of a category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Single pass, advance only.
    Forward,
    /// Adds retreat.
    Bidirectional,
    /// Adds jumps, distances, indexing and full ordering.
    RandomAccess,
}

impl CategoryKind {
    /// The weaker of two categories.
    pub const fn meet(self, other: CategoryKind) -> CategoryKind {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Reduce a list of categories pairwise, left to right.
    ///
    /// Returns `None` for an empty list: a zip needs at least one member.
    pub fn meet_all(kinds: impl IntoIterator<Item = CategoryKind>) -> Option<CategoryKind> {
        kinds.into_iter().reduce(CategoryKind::meet)
    }

    pub const fn supports_retreat(self) -> bool {
        !matches!(self, CategoryKind::Forward)
    }

    pub const fn supports_random_access(self) -> bool {
        matches!(self, CategoryKind::RandomAccess)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CategoryKind::Forward => "forward",
            CategoryKind::Bidirectional => "bidirectional",
            CategoryKind::RandomAccess => "random-access",
        })
    }
}

/// Type-level category marker.
pub trait Category: Copy + Default + fmt::Debug + 'static {
    const KIND: CategoryKind;

    /// This category capped at bidirectional.
    type AtMostBidirectional: Category;

    /// The weaker of `Self` and `Other`.
    type Meet<Other: Category>: Category;
}

/// Single-pass, advance-only cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forward;

/// Cursors that can also step backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

/// Cursors with constant-time jumps and distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomAccess;

impl Category for Forward {
    const KIND: CategoryKind = CategoryKind::Forward;
    type AtMostBidirectional = Forward;
    type Meet<Other: Category> = Forward;
}

impl Category for Bidirectional {
    const KIND: CategoryKind = CategoryKind::Bidirectional;
    type AtMostBidirectional = Bidirectional;
    type Meet<Other: Category> = Other::AtMostBidirectional;
}

impl Category for RandomAccess {
    const KIND: CategoryKind = CategoryKind::RandomAccess;
    type AtMostBidirectional = Bidirectional;
    type Meet<Other: Category> = Other;
}

/// Shorthand for `<A as Category>::Meet<B>`.
pub type MeetOf<A, B> = <A as Category>::Meet<B>;
