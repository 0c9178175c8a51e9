// envmap: environment variable maps for subprocess execution
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_log_level_from_u8() {
    let levels: Vec<String> = (0..=6)
        .map(|n| format!("{n} = {:?}", LogLevel::from_u8(n)))
        .collect();
    insta::assert_snapshot!(levels.join("\n"), @r"
    0 = Some(Off)
    1 = Some(Error)
    2 = Some(Warn)
    3 = Some(Info)
    4 = Some(Debug)
    5 = Some(Trace)
    6 = None
    ");
}

#[test]
fn test_log_level_validation() {
    assert_eq!(LogLevel::new(4).ok(), Some(LogLevel::Debug));
    let err = LogLevel::new(9).expect_err("level 9 is out of range");
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log.level': log level must be 0-5, got 9");
}

#[test]
fn test_log_level_filter_mapping() {
    assert_eq!(LogLevel::Off.level_filter(), LevelFilter::OFF);
    assert_eq!(LogLevel::Info.level_filter(), LevelFilter::INFO);
    assert_eq!(LogLevel::Trace.level_filter(), LevelFilter::TRACE);
    assert_eq!(u8::from(LogLevel::Warn), 2);
    assert!(LogLevel::Debug > LogLevel::Info);
}

#[test]
fn test_log_level_serde() {
    assert_eq!(serde_json::to_string(&LogLevel::Debug).expect("serialize"), "4");
    let level: LogLevel = serde_json::from_str("2").expect("deserialize");
    assert_eq!(level, LogLevel::Warn);
    assert!(serde_json::from_str::<LogLevel>("6").is_err());
}

#[test]
fn test_log_config_builder() {
    let default = LogConfig::default();
    assert_eq!(default.console_level(), LogLevel::Info);
    assert_eq!(default.file_level(), LogLevel::Trace);
    assert_eq!(default.log_file(), None);
    assert!(default.timestamps());

    let config = LogConfig::builder()
        .console_level(LogLevel::Warn)
        .log_file("logs/envmap.log")
        .timestamps(false)
        .build();
    assert_eq!(config.console_level(), LogLevel::Warn);
    assert_eq!(config.log_file(), Some(Path::new("logs/envmap.log")));
    assert!(!config.timestamps());
}
