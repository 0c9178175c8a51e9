// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for environment maps.
//!
//! Exercises the public API the way a caller preparing a child process
//! environment would.

use envmap::{Change, Diff, EnvMap, current_env, merge, parse};

// =============================================================================
// Process environment snapshot
// =============================================================================

#[test]
fn current_env_matches_process_environment() {
    // Windows keeps per-drive entries such as `=C:` whose names contain '='.
    let expected: Vec<String> = std::env::vars_os()
        .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
        .filter(|(k, _)| !k.contains('='))
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    let snapshot: EnvMap = current_env()
        .into_iter()
        .filter(|(k, _)| !k.contains('='))
        .collect();

    assert_eq!(snapshot, parse(&expected));
}

#[test]
fn current_env_is_a_snapshot() {
    let mut snapshot = current_env();
    snapshot.set("ENVMAP_SNAPSHOT_ONLY", "1");

    assert!(std::env::var_os("ENVMAP_SNAPSHOT_ONLY").is_none());
    assert!(!current_env().contains_key("ENVMAP_SNAPSHOT_ONLY"));
}

// =============================================================================
// Building a child environment
// =============================================================================

#[test]
fn overlay_on_process_environment() {
    let base = current_env();
    let overrides = parse(["ENVMAP_CHILD=yes", "not an assignment", "ENVMAP_EMPTY="]);
    let child = merge([&base, &overrides]);

    assert_eq!(child.get("ENVMAP_CHILD"), Some("yes"));
    assert_eq!(child.get("ENVMAP_EMPTY"), Some(""));
    assert_eq!(child.len(), base.len() + 2);

    let diff = base.diff(&child);
    assert!(diff.only_in_m.is_empty());
    assert!(diff.changes.is_empty());
    assert_eq!(diff.only_in_n, overrides);
}

#[test]
fn encoded_form_is_sorted_and_round_trips() {
    let env = EnvMap::from([
        ("PATH", "/usr/bin:/bin"),
        ("LANG", "C.UTF-8"),
        ("EQUALS", "a=b"),
        ("EMPTY", ""),
    ]);
    let encoded = env.encode();

    assert_eq!(
        encoded,
        ["EMPTY=", "EQUALS=a=b", "LANG=C.UTF-8", "PATH=/usr/bin:/bin"]
    );
    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(encoded, sorted);
    assert_eq!(parse(&encoded), env);
}

#[test]
fn display_forms() {
    let env = EnvMap::from([("FOO", "x"), ("BAR", "y")]);

    insta::assert_snapshot!(env.to_string(), @"BAR=y FOO=x");
    insta::assert_snapshot!(format!("{env:#}"), @r"
    BAR=y
    FOO=x
    ");
    assert_eq!(format!("{env:x}"), "");
    assert_eq!(format!("{env:e}"), "");
}

// =============================================================================
// Diffing
// =============================================================================

#[test]
fn diff_partitions_keys() {
    let m = EnvMap::from([("A", "1"), ("B", "2"), ("C", "3"), ("SAME", "=")]);
    let n = EnvMap::from([("B", "2"), ("C", "30"), ("D", "4"), ("SAME", "=")]);

    let diff = m.diff(&n);
    assert_eq!(
        diff,
        Diff {
            only_in_m: EnvMap::from([("A", "1")]),
            changes: vec![Change::new("C", "3", "30")],
            only_in_n: EnvMap::from([("D", "4")]),
        }
    );

    let json = serde_json::to_string(&diff).expect("serialize");
    insta::assert_snapshot!(
        json,
        @r#"{"only_in_m":{"A":"1"},"changes":[{"key":"C","m_value":"3","n_value":"30"}],"only_in_n":{"D":"4"}}"#
    );

    let reverse = n.diff(&m);
    assert_eq!(reverse.only_in_m, diff.only_in_n);
    assert_eq!(reverse.only_in_n, diff.only_in_m);
    assert_eq!(reverse.changes, [Change::new("C", "30", "3")]);
}
