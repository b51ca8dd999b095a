// ABOUTME: Tests for logging configuration and subscriber installation
// ABOUTME: Validates LOG_FORMAT parsing and that the pretty layer installs as the global subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use profit_advisor::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_log_format_from_env() {
    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "pretty");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);

    env::set_var("LOG_FORMAT", "fancy");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::remove_var("LOG_FORMAT");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
}

// Only test in this binary that installs a global subscriber
#[test]
#[serial]
fn test_pretty_subscriber_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        include_location: true,
        include_spans: true,
        ..LoggingConfig::default()
    }
    .with_level("debug");

    config.init().unwrap();
    assert!(config.init().is_err());
}
