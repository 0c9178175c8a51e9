// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Differences between two environments, "M" and "N".
//!
//! ```text
//! M.diff(N)
//!   key only in M            --> only_in_m
//!   key only in N            --> only_in_n
//!   key in both, value differs --> changes (sorted by key)
//!   key in both, same value  --> nowhere
//! ```

use super::container::EnvMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Describes differences between two environments, "M" and "N".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Variables set in M but not in N.
    pub only_in_m: EnvMap,
    /// Variables set in both with differing values, in key order.
    pub changes: Vec<Change>,
    /// Variables set in N but not in M.
    pub only_in_n: EnvMap,
}

impl Diff {
    pub(super) fn between(m: &EnvMap, n: &EnvMap) -> Self {
        let mut diff = Self::default();

        for (key, m_value) in m.iter() {
            match n.get(key) {
                None => {
                    diff.only_in_m.set(key, m_value);
                }
                Some(n_value) if n_value != m_value => {
                    diff.changes.push(Change::new(key, m_value, n_value));
                }
                Some(_) => {}
            }
        }

        for (key, n_value) in n.iter() {
            if !m.contains_key(key) {
                diff.only_in_n.set(key, n_value);
            }
        }

        debug!(
            only_in_m = diff.only_in_m.len(),
            only_in_n = diff.only_in_n.len(),
            changes = diff.changes.len(),
            "computed environment diff"
        );
        diff
    }

    /// Returns `true` if the two environments were identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_m.is_empty() && self.only_in_n.is_empty() && self.changes.is_empty()
    }

    /// Total number of differing keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.only_in_m.len() + self.only_in_n.len() + self.changes.len()
    }
}

/// One line per difference: `- K=V` (only in M), `+ K=V` (only in N) and
/// `~ K: a -> b` (changed).
impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let removed = self.only_in_m.iter().map(|(k, v)| format!("- {k}={v}"));
        let changed = self.changes.iter().map(|c| format!("~ {c}"));
        let added = self.only_in_n.iter().map(|(k, v)| format!("+ {k}={v}"));

        for (i, line) in removed.chain(changed).chain(added).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Describes a change in a value in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    pub key: String,
    /// Value in M.
    pub m_value: String,
    /// Value in N.
    pub n_value: String,
}

impl Change {
    pub fn new(
        key: impl Into<String>,
        m_value: impl Into<String>,
        n_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            m_value: m_value.into(),
            n_value: n_value.into(),
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.key, self.m_value, self.n_value)
    }
}
