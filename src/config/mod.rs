// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration describing how to build a child environment.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. TOML files / strings, in the order added
//! 3. ENVMAP_* env vars (ConfigLoader::with_env)
//! 4. explicit overrides (ConfigLoader::set_override)
//! ```
//!
//! # Resolution
//!
//! ```text
//! inherit ? base : {}  --merge-->  parse_strict(set)  --remove-->  unset
//! ```
//!
//! # Example
//!
//! ```toml
//! inherit = false
//! set = ["CC=clang", "CFLAGS=-O2 -g"]
//! unset = ["MAKEFLAGS"]
//!
//! [log]
//! level = 4
//! file = "logs/envmap.log"
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVMAP_INHERIT=false     → inherit = false
//! ENVMAP_SET=A=1,B=2       → set = ["A=1", "B=2"]
//! ENVMAP_UNSET=MAKEFLAGS   → unset = ["MAKEFLAGS"]
//! ENVMAP_LOG_LEVEL=5       → log.level = 5
//! ENVMAP_LOG_FILE=out.log  → log.file = "out.log"
//! ```
//!
//! Any other `ENVMAP_*` variable is rejected as an unknown field once
//! [`ConfigLoader::with_env`] is enabled.

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::env::{self, EnvMap};
use crate::error::{ConfigError, EnvMapResult};
use crate::logging::{LogConfig, LogLevel};

use loader::ConfigLoader;

/// Complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start from the base (usually the process) environment.
    pub inherit: bool,
    /// `KEY=VALUE` assignments applied over the base.
    pub set: Vec<String>,
    /// Variables removed after assignments.
    pub unset: Vec<String>,
    /// Logging options.
    pub log: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inherit: true,
            set: Vec::new(),
            unset: Vec::new(),
            log: LogSettings::default(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-5).
    pub level: LogLevel,
    /// Optional log file; receives everything up to trace level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envmap::config::Config;
    ///
    /// let config = Config::builder()
    ///     .file("envmap.toml")
    ///     .optional_file("envmap.local.toml")
    ///     .with_env()
    ///     .build()?;
    /// # Ok::<(), envmap::error::EnvMapError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EnvMapResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        Self::builder().file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or fails validation.
    pub fn parse(toml: &str) -> EnvMapResult<Self> {
        Self::builder().toml(toml).build()
    }

    /// Checks that every `set` entry is in `KEY=VALUE` form.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first malformed entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assignments().map(|_| ())
    }

    fn assignments(&self) -> Result<EnvMap, ConfigError> {
        env::try_parse(&self.set).map_err(|e| ConfigError::InvalidValue {
            key: "set".to_string(),
            message: e.to_string(),
        })
    }

    /// Builds the configured environment on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a `set` entry is malformed.
    pub fn resolve(&self, base: &EnvMap) -> EnvMapResult<EnvMap> {
        let assignments = self.assignments()?;

        let mut resolved = if self.inherit {
            env::merge([base, &assignments])
        } else {
            assignments
        };
        for key in &self.unset {
            resolved.remove(key);
        }

        debug!(
            inherit = self.inherit,
            set = self.set.len(),
            unset = self.unset.len(),
            vars = resolved.len(),
            "resolved configured environment"
        );
        Ok(resolved)
    }

    /// Builds the configured environment on top of a snapshot of the current
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `set` entry is malformed.
    pub fn resolve_current(&self) -> EnvMapResult<EnvMap> {
        self.resolve(&env::current_env())
    }

    /// Logging configuration derived from the `[log]` section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .console_level(self.log.level)
            .maybe_log_file(self.log.file.as_ref().map(PathBuf::from))
            .build()
    }
}
