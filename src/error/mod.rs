// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvMapError (~24 bytes)
//!                |
//!   +--------+---+----+---------+
//!   |        |        |         |
//!   v        v        v         v
//! Parse    Config    Io      Logging
//!  Box      Box      Box     Box<str>
//!
//! parse_strict()            --> Parse   (MissingSeparator)
//! ConfigLoader / Config     --> Config  (Load, InvalidValue, NotFound)
//! init_logging() log file   --> Io
//! init_logging() subscriber --> Logging
//! ```
//!
//! The map operations themselves never fail.

use thiserror::Error;

/// Result type using [`EnvMapError`].
pub type EnvMapResult<T> = std::result::Result<T, EnvMapError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvMapError {
    /// Strict parsing rejected an entry.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error (log file creation).
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// The global tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(Box<str>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvMapError {
                fn from(err: $error) -> Self {
                    EnvMapError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ParseError => Parse,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Parse Errors ---

/// Errors from strict `KEY=VALUE` parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The entry has no `=` separating key from value.
    #[error("entry {index} is not in KEY=VALUE form: {entry:?}")]
    MissingSeparator { index: usize, entry: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, parsed or deserialized.
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
