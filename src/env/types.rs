// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvFlags: Replace | Append | Prepend
//! PATH_LIST_SEPARATOR: ";" (Windows) / ":" (elsewhere)
//! ```

/// Separator between entries of `PATH`-like variables on this platform.
pub const PATH_LIST_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Flags for environment variable operations.
///
/// `Append` and `Prepend` concatenate without a separator; for `PATH`-style
/// lists use [`super::EnvMap::append_path`] / [`super::EnvMap::prepend_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

impl EnvFlags {
    /// Combines `existing` with `value` according to the flag.
    pub(super) fn combine(self, existing: Option<&str>, value: &str) -> String {
        match (self, existing) {
            (Self::Append, Some(existing)) => format!("{existing}{value}"),
            (Self::Prepend, Some(existing)) => format!("{value}{existing}"),
            _ => value.to_owned(),
        }
    }
}
