// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! The library only emits events (`trace!` for skipped parse entries,
//! `debug!` for merge, diff and config summaries). Applications embedding it
//! may install a subscriber through [`init_logging`].
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        +-- subscriber already set? --> EnvMapError::Logging
//!        v
//!    registry
//!    |        |
//!    v        v
//! Console    File (optional, appended)
//! EnvFilter  LevelFilter
//! RUST_LOG   non_blocking
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO  4=DEBUG  5=TRACE
//! ```

use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, EnvMapError, EnvMapResult};

/// Verbosity, configured as an integer 0-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    /// Merge, diff and config summaries.
    Debug = 4,
    /// Every skipped parse entry.
    Trace = 5,
}

impl LogLevel {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `level` is greater than 5.
    pub fn new(level: u8) -> Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            key: "log.level".to_string(),
            message: format!("log level must be 0-5, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as Self
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*self))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(default)]
    console_level: LogLevel,
    /// Appended to, never truncated.
    #[builder(into)]
    log_file: Option<PathBuf>,
    #[builder(default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(default = true)]
    timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    /// Whether console lines carry a timestamp.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` directives, when set, override the configured console level.
///
/// # Errors
///
/// Returns [`EnvMapError::Logging`] if a global subscriber is already
/// installed (checked before any file is touched), or [`EnvMapError::Io`]
/// if the log file or its directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use envmap::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .console_level(LogLevel::Debug)
///     .log_file("logs/envmap.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("Logging initialized");
/// # Ok::<(), envmap::error::EnvMapError>(())
/// ```
pub fn init_logging(config: &LogConfig) -> EnvMapResult<LogGuard> {
    if tracing::dispatcher::has_been_set() {
        return Err(EnvMapError::Logging(
            "a global tracing subscriber is already installed".into(),
        ));
    }

    let console_filter = EnvFilter::builder()
        .with_default_directive(config.console_level().level_filter().into())
        .from_env_lossy();
    let console_layer = fmt::layer().with_target(false);
    let console_layer = if config.timestamps() {
        console_layer.with_filter(console_filter).boxed()
    } else {
        console_layer
            .without_time()
            .with_filter(console_filter)
            .boxed()
    };

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(config.file_level().level_filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EnvMapError::Logging(e.to_string().into_boxed_str()))?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests;
