// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of [`Config`].
//!
//! ```text
//! ConfigLoader::new()
//!   .file(path)            required TOML file
//!   .optional_file(path)   skipped when absent
//!   .toml(str)             inline TOML
//!   .with_env()            ENVMAP_* (applied after all files)
//!   .set_override(k, v)    highest priority
//!        |
//!        v
//!    build() --> Config (validated)
//!
//! ENVMAP_INHERIT=false           inherit = false
//! ENVMAP_SET=CC=clang,CFLAGS=-O2 set = ["CC=clang", "CFLAGS=-O2"]
//! ENVMAP_UNSET=MAKEFLAGS         unset = ["MAKEFLAGS"]
//! ENVMAP_LOG_LEVEL=4             log.level = 4
//! ENVMAP_LOG_FILE=envmap.log     log.file = "envmap.log"
//! ```

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use tracing::debug;

use super::Config;
use crate::error::{ConfigError, EnvMapResult};

/// Prefix of the environment variables read by [`ConfigLoader::with_env`].
pub const ENV_PREFIX: &str = "ENVMAP";

/// Separator between entries of `ENVMAP_SET` and `ENVMAP_UNSET`.
pub const ENV_LIST_SEPARATOR: &str = ",";

/// Builder collecting configuration sources in priority order.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    read_env: bool,
    layers: usize,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            read_env: false,
            layers: 0,
        }
    }

    /// Adds a TOML file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self.layers += 1;
        self
    }

    /// Adds a TOML file that is skipped if it does not exist.
    #[must_use]
    pub fn optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        );
        self.layers += 1;
        self
    }

    /// Adds inline TOML.
    #[must_use]
    pub fn toml(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.layers += 1;
        self
    }

    /// Reads `ENVMAP_*` variables on top of every file source.
    #[must_use]
    pub const fn with_env(mut self) -> Self {
        self.read_env = true;
        self
    }

    /// Overrides a single key, e.g. `("inherit", false)`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the key path is malformed.
    pub fn set_override<T>(mut self, key: &str, value: T) -> EnvMapResult<Self>
    where
        T: Into<config::Value>,
    {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(ConfigError::from)?;
        Ok(self)
    }

    /// Merges all sources into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a required file is missing, a source is
    /// not valid TOML, or the merged values do not fit [`Config`];
    /// `ConfigError::InvalidValue` if a `set` entry is not `KEY=VALUE`.
    pub fn build(self) -> EnvMapResult<Config> {
        let builder = if self.read_env {
            self.builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(ENV_LIST_SEPARATOR)
                    .with_list_parse_key("set")
                    .with_list_parse_key("unset"),
            )
        } else {
            self.builder
        };

        let config = builder
            .build()
            .and_then(|merged| merged.try_deserialize::<Config>())
            .map_err(ConfigError::from)?;
        config.validate()?;

        debug!(
            layers = self.layers,
            env = self.read_env,
            "loaded configuration"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
