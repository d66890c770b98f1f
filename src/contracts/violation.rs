// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records carried by a failed contract.
//!
//! A violation is built at the point of failure, never mutated, and travels
//! up the stack as a panic payload. Everything an embedding harness needs to
//! assert against lives here: the failed condition (or message), what kind of
//! check it was, and where in the source it sat.
//!
//! # Message Formats
//!
//! | Variant          | `Display`                                                   |
//! |------------------|-------------------------------------------------------------|
//! | `Contract`       | `<condition> failed <kind> DBC test in <file>:<line>`       |
//! | `NotImplemented` | `<message> not implemented at <file>:<line>`                |
//! | `NotReachable`   | `Logically unreachable code block reached at <file>:<line>` |

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The three severities of a checked contract.
///
/// All three are switched on and off together; the kind only says which
/// side of an operation the broken promise was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    /// The caller handed in arguments the operation cannot accept.
    Precondition,
    /// An internal consistency assumption failed mid-operation.
    Intermediate,
    /// An operation is about to return a result it promised not to.
    Postcondition,
}

impl ContractKind {
    /// The lowercase name used in violation messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Intermediate => "intermediate",
            ContractKind::Postcondition => "postcondition",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fail-fast signal raised by the contract layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    /// A `require!`, `check!`, or `ensure!` condition evaluated to false.
    Contract {
        condition: &'static str,
        kind: ContractKind,
        file: &'static str,
        line: u32,
    },
    /// A documented stub was reached at runtime.
    NotImplemented {
        message: Cow<'static, str>,
        file: &'static str,
        line: u32,
    },
    /// A code path the logic says cannot happen, happened.
    NotReachable { file: &'static str, line: u32 },
}

impl Violation {
    /// Source file where the violation was raised.
    pub fn file(&self) -> &'static str {
        match self {
            Violation::Contract { file, .. }
            | Violation::NotImplemented { file, .. }
            | Violation::NotReachable { file, .. } => file,
        }
    }

    /// Source line where the violation was raised.
    pub fn line(&self) -> u32 {
        match self {
            Violation::Contract { line, .. }
            | Violation::NotImplemented { line, .. }
            | Violation::NotReachable { line, .. } => *line,
        }
    }

    /// The contract kind, if this was a checked condition.
    pub fn kind(&self) -> Option<ContractKind> {
        match self {
            Violation::Contract { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The literal text of the failed condition, if any.
    pub fn condition(&self) -> Option<&'static str> {
        match self {
            Violation::Contract { condition, .. } => Some(condition),
            _ => None,
        }
    }

    pub fn is_precondition(&self) -> bool {
        self.kind() == Some(ContractKind::Precondition)
    }

    pub fn is_intermediate(&self) -> bool {
        self.kind() == Some(ContractKind::Intermediate)
    }

    pub fn is_postcondition(&self) -> bool {
        self.kind() == Some(ContractKind::Postcondition)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Contract {
                condition,
                kind,
                file,
                line,
            } => {
                write!(f, "{} failed {} DBC test in {}:{}", condition, kind, file, line)
            }
            Violation::NotImplemented {
                message,
                file,
                line,
            } => {
                write!(f, "{} not implemented at {}:{}", message, file, line)
            }
            Violation::NotReachable { file, line } => {
                write!(
                    f,
                    "Logically unreachable code block reached at {}:{}",
                    file, line
                )
            }
        }
    }
}

impl std::error::Error for Violation {}
