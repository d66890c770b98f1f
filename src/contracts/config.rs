// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide contract configuration.
//!
//! Two switches decide whether `require!`, `check!`, and `ensure!` evaluate
//! their conditions:
//!
//! 1. The `dbc` Cargo feature. Without it every check compiles to a dead
//!    branch and nothing below matters.
//! 2. A [`ContractConfig`] resolved once per process. It defaults to the
//!    environment (`LOCKSTEP_DBC=0|false|off` turns checks off) and can be
//!    injected with [`install`] before the first check runs.
//!
//! The runtime switch can only narrow the build-time one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Environment variable consulted by [`ContractConfig::from_env`].
pub const ENV_VAR: &str = "LOCKSTEP_DBC";

/// Whether the crate was built with contract checks compiled in.
pub const BUILD_ENABLED: bool = cfg!(feature = "dbc");

static CONFIG: OnceLock<ContractConfig> = OnceLock::new();

/// Runtime contract settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Evaluate `require!`/`check!`/`ensure!` conditions.
    pub enabled: bool,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            enabled: BUILD_ENABLED,
        }
    }
}

impl ContractConfig {
    /// Checks on (subject to the build feature).
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Checks off.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Read the configuration from [`ENV_VAR`].
    ///
    /// Unset or unrecognized values leave the default in place.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => Self::from_flag(&value).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Parse a flag value such as `"on"` or `"0"`.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Some(Self::enabled()),
            "0" | "false" | "off" | "no" => Some(Self::disabled()),
            _ => None,
        }
    }
}

/// Returned by [`install`] when the configuration was already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyResolved {
    /// The configuration that is in effect.
    pub current: ContractConfig,
}

impl fmt::Display for AlreadyResolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contract configuration already resolved (enabled = {})",
            self.current.enabled
        )
    }
}

impl std::error::Error for AlreadyResolved {}

/// Inject the process-wide configuration.
///
/// Must run before the first contract check; afterwards the resolved value is
/// fixed for the life of the process.
pub fn install(config: ContractConfig) -> Result<(), AlreadyResolved> {
    CONFIG.set(config).map_err(|_| AlreadyResolved { current: *current() })?;
    tracing::debug!(
        target: "lockstep::contracts",
        enabled = config.enabled,
        build_enabled = BUILD_ENABLED,
        "contract configuration installed"
    );
    Ok(())
}

/// The configuration in effect, resolving it from the environment on first use.
///
/// The crate's own unit tests assert on violations, so they ignore the
/// environment and resolve to the build default.
pub fn current() -> &'static ContractConfig {
    CONFIG.get_or_init(|| {
        let config = if cfg!(test) {
            ContractConfig::default()
        } else {
            ContractConfig::from_env()
        };
        tracing::debug!(
            target: "lockstep::contracts",
            enabled = config.enabled,
            build_enabled = BUILD_ENABLED,
            "contract configuration resolved"
        );
        config
    })
}

/// Whether checked contracts evaluate their conditions right now.
#[inline]
pub fn enabled() -> bool {
    BUILD_ENABLED && current().enabled
}
