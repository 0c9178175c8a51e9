// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment variable map and its textual forms.
//!
//! ```text
//! EnvMap (BTreeMap<String, String>, sorted by key)
//!   render(sep)   "A=1<sep>B=2"
//!   encode()      ["A=1", "B=2"]      --> Command / exec env lists
//!   Display       {}  "A=1 B=2"
//!                 {:#} "A=1\nB=2"
//!   {:x} {:o} {:b} {:e} ...           --> "" (unsupported)
//! ```

use super::diff::Diff;
use super::types::{EnvFlags, PATH_LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// A set of environment variables.
///
/// Keys are unique and kept in byte-wise lexicographic order, so every
/// rendering of the map is stable regardless of how it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvMap {
    vars: BTreeMap<String, String>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Parses `KEY=VALUE` entries, skipping any without `=`.
    ///
    /// See [`super::parse`].
    #[must_use]
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        super::parse(entries)
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    ///
    /// `Append` and `Prepend` concatenate with the existing value without a
    /// separator; with no existing value they behave like `Replace`.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = key.into();
        let value: String = value.into();
        let combined = flags.combine(self.get(&key), &value);
        self.vars.insert(key, combined);
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }

    /// Prepends a path to the PATH environment variable.
    pub fn prepend_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path.as_ref(), EnvFlags::Prepend)
    }

    /// Appends a path to the PATH environment variable.
    pub fn append_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.modify_path(path.as_ref(), EnvFlags::Append)
    }

    fn modify_path(&mut self, path: &Path, flags: EnvFlags) -> &mut Self {
        let path_str = path.to_string_lossy();
        let new_path = match (flags, self.get("PATH")) {
            (EnvFlags::Prepend, Some(current)) => {
                format!("{path_str}{PATH_LIST_SEPARATOR}{current}")
            }
            (EnvFlags::Append, Some(current)) => {
                format!("{current}{PATH_LIST_SEPARATOR}{path_str}")
            }
            _ => path_str.into_owned(),
        };
        self.set("PATH", new_path)
    }

    /// Copies every entry of `other` into `self`; `other` wins on collisions.
    pub fn extend_from(&mut self, other: &Self) -> &mut Self {
        self.vars
            .extend(other.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the variable names in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }

    /// Renders `key=value` entries in key order, joined by `sep`.
    ///
    /// An empty map renders as the empty string.
    #[must_use]
    pub fn render(&self, sep: &str) -> String {
        self.encode().join(sep)
    }

    /// Encodes the map as `key=value` strings in key order.
    ///
    /// The result can be handed as-is to anything expecting an environment
    /// list, such as an exec-style spawn API.
    #[must_use]
    pub fn encode(&self) -> Vec<String> {
        self.vars.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    /// Computes the differences between `self` ("M") and `other` ("N").
    #[must_use]
    pub fn diff(&self, other: &Self) -> Diff {
        Diff::between(self, other)
    }

    /// Installs this map as the complete environment of `command`.
    ///
    /// The inherited environment is cleared first, so the child sees exactly
    /// these variables. Nothing is spawned.
    pub fn apply_to<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command.env_clear();
        command.envs(self.iter())
    }

    fn write_entries(&self, f: &mut fmt::Formatter<'_>, sep: &str) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Space-separated `key=value` pairs; with `{:#}`, newline-separated.
impl fmt::Display for EnvMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if f.alternate() { "\n" } else { " " };
        self.write_entries(f, sep)
    }
}

/// Generates formatting impls that produce no output.
macro_rules! impl_unsupported_format {
    ($($format:ident),+ $(,)?) => {
        $(
            impl fmt::$format for EnvMap {
                fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Ok(())
                }
            }
        )+
    };
}

impl_unsupported_format!(LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

impl From<BTreeMap<String, String>> for EnvMap {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self::from_map(vars)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for EnvMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for EnvMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.vars
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<'a> IntoIterator for &'a EnvMap {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
