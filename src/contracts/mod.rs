// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-by-contract checks guarding every cursor boundary.
//!
//! The adaptors in this crate compose cursors they know nothing about. The
//! dangerous operations (comparing cursors with different strides, stepping an
//! unsigned value below zero, jumping a zip whose members cannot be converted
//! to the requested distance) are fenced by checks from this module:
//!
//! | Macro                   | Kind            | Disabled by `dbc` switch? |
//! |-------------------------|-----------------|---------------------------|
//! | `require!(cond)`        | precondition    | yes                       |
//! | `check!(cond)`          | intermediate    | yes                       |
//! | `ensure!(cond)`         | postcondition   | yes                       |
//! | `not_implemented!(msg)` | -               | never                     |
//! | `not_reachable!()`      | -               | never                     |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! A failed check never returns. It logs one `tracing` error event and panics
//! with a [`Violation`] payload, which unwinds to the nearest
//! [`catch_violation`] (or terminates the process). There is no retry and no
//! clamping anywhere in the crate.
//!
//! # Disabled checks
//!
//! With checks off the condition is still type-checked but sits behind a
//! constant-false branch, so it is never evaluated:
//!
//! ```ignore
//! require!(expensive_validation(&cursor)); // compiled, not run
//! ```
//!
//! # Usage
//!
//! ```
//! use lockstep::contracts::{catch_violation, ContractKind};
//!
//! let result = catch_violation(|| {
//!     lockstep::require!(1 + 1 == 3);
//! });
//!
//! let violation = result.unwrap_err();
//! assert_eq!(violation.kind(), Some(ContractKind::Precondition));
//! assert_eq!(violation.condition(), Some("1 + 1 == 3"));
//! ```

pub mod config;
mod violation;

pub use config::{enabled, ContractConfig};
pub use violation::{ContractKind, Violation};

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

// ============================================================================
// MACROS
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __contract_assert {
    ($cond:expr, $kind:ident) => {
        if $crate::contracts::enabled() {
            if !($cond) {
                $crate::contracts::contract_failed(
                    ::core::stringify!($cond),
                    $crate::contracts::ContractKind::$kind,
                    ::core::file!(),
                    ::core::line!(),
                );
            }
        } else if false && ($cond) {
        }
    };
}

/// Precondition: the caller handed in something the operation can accept.
#[macro_export]
macro_rules! require {
    ($cond:expr $(,)?) => {
        $crate::__contract_assert!($cond, Precondition)
    };
}

/// Intermediate check: an internal consistency assumption holds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::__contract_assert!($cond, Intermediate)
    };
}

/// Postcondition: the result about to be returned keeps its promise.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $crate::__contract_assert!($cond, Postcondition)
    };
}

/// Unconditionally fail with a "not implemented" violation.
#[macro_export]
macro_rules! not_implemented {
    ($msg:expr $(,)?) => {
        $crate::contracts::not_implemented_failed($msg, ::core::file!(), ::core::line!())
    };
}

/// Unconditionally fail with a "not reachable" violation.
#[macro_export]
macro_rules! not_reachable {
    () => {
        $crate::contracts::not_reachable_failed(::core::file!(), ::core::line!())
    };
}

// ============================================================================
// FAILURE ENTRY POINTS
// ============================================================================

/// Raise a failed `require!`/`check!`/`ensure!`.
#[cold]
#[inline(never)]
pub fn contract_failed(
    condition: &'static str,
    kind: ContractKind,
    file: &'static str,
    line: u32,
) -> ! {
    raise(Violation::Contract {
        condition,
        kind,
        file,
        line,
    })
}

/// Raise a "not implemented" violation.
#[cold]
#[inline(never)]
pub fn not_implemented_failed(
    message: impl Into<Cow<'static, str>>,
    file: &'static str,
    line: u32,
) -> ! {
    raise(Violation::NotImplemented {
        message: message.into(),
        file,
        line,
    })
}

/// Raise a "not reachable" violation.
#[cold]
#[inline(never)]
pub fn not_reachable_failed(file: &'static str, line: u32) -> ! {
    raise(Violation::NotReachable { file, line })
}

fn raise(violation: Violation) -> ! {
    tracing::error!(
        target: "lockstep::contracts",
        kind = violation.kind().map_or("-", ContractKind::as_str),
        condition = violation.condition().unwrap_or("-"),
        file = violation.file(),
        line = violation.line(),
        "{}",
        violation
    );
    panic::panic_any(violation)
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Run `f`, turning a contract violation into an `Err`.
///
/// Panics that are not violations are resumed untouched. Any state `f`
/// mutated may be left mid-operation when a violation is caught.
pub fn catch_violation<F, R>(f: F) -> Result<R, Violation>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Violation>() {
            Ok(violation) => Err(*violation),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Print uncaught violations with their full message.
///
/// The default hook only knows how to print string payloads. This wraps
/// whatever hook is installed; other panics still reach it. Calling it more
/// than once has no further effect.
pub fn install_panic_hook() {
    static INSTALLED: Once = Once::new();

    INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            match info.payload().downcast_ref::<Violation>() {
                Some(violation) => eprintln!("contract violation: {}", violation),
                None => previous(info),
            }
        }));
    });
}
