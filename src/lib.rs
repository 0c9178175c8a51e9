// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!          current_env()   parse()/parse_strict()   merge()
//!                 \               |                  /
//!                  v              v                 v
//!              ,-------------------------------------,
//!              |               EnvMap                |
//!              |   BTreeMap<String, String>, sorted  |
//!              '--+-----------+-----------+----------'
//!                 |           |           |
//!                 v           v           v
//!          render/Display  encode()    diff()
//!           "A=1 B=2"   ["A=1","B=2"]  Diff { only_in_m,
//!                           |                changes,
//!                           v                only_in_n }
//!                   apply_to(Command)
//!
//!   +-----------------------------------------+
//!   |  config   TOML + ENVMAP_* -> EnvMap     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use env::{Change, Diff, EnvFlags, EnvMap, current_env, merge, parse, parse_strict};
