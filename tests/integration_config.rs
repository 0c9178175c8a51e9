// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use envmap::EnvMap;
use envmap::config::Config;
use envmap::config::loader::ConfigLoader;
use envmap::logging::LogLevel;
use std::io::Write;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file_resolves_environment() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
inherit = false
set = ["CC=clang", "CXX=clang++", "CFLAGS=-O2 -g"]
unset = ["CXX"]

[log]
level = 3
"#
    )
    .expect("write config");

    let config = Config::from_file(file.path()).expect("config should load");
    let env = config.resolve(&EnvMap::new()).expect("resolve");
    assert_eq!(env.encode(), ["CC=clang", "CFLAGS=-O2 -g"]);
}

// =============================================================================
// Environment overrides
// =============================================================================

#[test]
fn config_loader_reads_envmap_variables() {
    // SAFETY: no other test in this binary reads or writes the environment
    unsafe {
        std::env::set_var("ENVMAP_INHERIT", "false");
        std::env::set_var("ENVMAP_SET", "A=1,B=2");
        std::env::set_var("ENVMAP_LOG_LEVEL", "5");
    }

    let config = ConfigLoader::new()
        .toml("inherit = true\nset = [\"C=3\"]\n[log]\nlevel = 1")
        .with_env()
        .build();

    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("ENVMAP_INHERIT");
        std::env::remove_var("ENVMAP_SET");
        std::env::remove_var("ENVMAP_LOG_LEVEL");
    }

    let config = config.expect("build should succeed");
    assert!(!config.inherit, "env var should override TOML value");
    assert_eq!(config.set, ["A=1", "B=2"]);
    assert_eq!(config.log.level, LogLevel::Trace);
    assert_eq!(
        config.resolve(&EnvMap::new()).expect("resolve").to_string(),
        "A=1 B=2"
    );
}

#[test]
fn config_serializes_to_json() {
    let config = Config::parse("set = [\"A=1\"]\nunset = [\"B\"]").expect("parse");
    let json = serde_json::to_string(&config).expect("serialize");
    insta::assert_snapshot!(
        json,
        @r#"{"inherit":true,"set":["A=1"],"unset":["B"],"log":{"level":3}}"#
    );
}
