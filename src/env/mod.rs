// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvMap (BTreeMap<String, String>)
//! Sources: current_env(), parse(), parse_strict(), merge(), EnvMap::from([..])
//! Ops: render/encode/diff/apply_to, set/get/remove/prepend_path/append_path
//! ```
//!
//! - **Sorted output**: every listing is in byte-wise key order
//! - **Value semantics**: maps are plain owned data, cloned explicitly
//! - **UTF-8 internal**: non-UTF-8 process data is converted lossily

pub mod container;
pub mod diff;
pub mod types;


use std::borrow::Borrow;

use tracing::{debug, trace};

pub use container::EnvMap;
pub use diff::{Change, Diff};
pub use types::EnvFlags;

use crate::error::{EnvMapResult, ParseError};

/// Captures the current process environment.
///
/// This is a snapshot: later changes to the process environment are not
/// reflected in the returned map.
#[must_use]
pub fn current_env() -> EnvMap {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

/// Parses a list of environment variables in `key=value` format.
///
/// Each entry is split on its first `=`; the value may be empty and may
/// itself contain `=`. Entries without `=` are ignored. Later entries win
/// over earlier ones with the same key. No whitespace is trimmed.
#[must_use]
pub fn parse<I, S>(entries: I) -> EnvMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut env = EnvMap::new();
    for entry in entries {
        let entry = entry.as_ref();
        match entry.split_once('=') {
            Some((key, value)) => {
                env.set(key, value);
            }
            None => trace!(entry, "skipping entry without '='"),
        }
    }
    env
}

/// Like [`parse`], but rejects entries without `=`.
///
/// # Errors
///
/// Returns [`crate::error::EnvMapError::Parse`] wrapping [`ParseError::MissingSeparator`]
/// for the first entry that is not in `key=value` form.
pub fn parse_strict<I, S>(entries: I) -> EnvMapResult<EnvMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(try_parse(entries)?)
}

pub(crate) fn try_parse<I, S>(entries: I) -> Result<EnvMap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut env = EnvMap::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let entry = entry.as_ref();
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| ParseError::MissingSeparator {
                index,
                entry: entry.to_owned(),
            })?;
        env.set(key, value);
    }
    Ok(env)
}

/// Merges environment variable maps.
///
/// In case of key collisions, values from maps later in the list take
/// precedence.
#[must_use]
pub fn merge<I>(maps: I) -> EnvMap
where
    I: IntoIterator,
    I::Item: Borrow<EnvMap>,
{
    let mut merged = EnvMap::new();
    let mut count = 0usize;
    for map in maps {
        merged.extend_from(map.borrow());
        count += 1;
    }
    debug!(maps = count, vars = merged.len(), "merged environments");
    merged
}
