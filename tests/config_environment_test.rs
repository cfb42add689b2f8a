// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_core::errors::ErrorCode;
use pierre_user_analytics::config::environment::{
    AnalyticsConfig, Environment, ServerConfig, DEFAULT_HTTP_PORT,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const CONFIG_VARS: [&str; 13] = [
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "DATA_DIR",
    "DEMOGRAPHICS_FILE",
    "PHYSICAL_FILE",
    "ACTIVITY_FILE",
    "INSURANCE_PROVIDERS_FILE",
    "INSURANCE_SERVICES_FILE",
    "PEER_TOP_N",
    "PEER_AGE_WINDOW",
    "PROGRESS_WEEKS",
    "PROGRESS_SEED",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
fn test_analytics_defaults() {
    let analytics = AnalyticsConfig::default();
    assert_eq!(analytics.peer_top_n, 5);
    assert_eq!(analytics.peer_age_window, 5);
    assert_eq!(analytics.progress_weeks, 8);
    assert_eq!(analytics.progress_seed, 42);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.data.data_dir, PathBuf::from("."));
    assert_eq!(config.data.demographics_file, "users_demographic.csv");
    assert_eq!(config.analytics, AnalyticsConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9100");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("DATA_DIR", "/srv/fitness");
    env::set_var("ACTIVITY_FILE", "activity_2025.csv");
    env::set_var("PEER_TOP_N", "10");
    env::set_var("PROGRESS_SEED", "7");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.http_port, 9100);
    assert!(config.environment.is_production());
    assert_eq!(
        config.data.activity_path(),
        PathBuf::from("/srv/fitness/activity_2025.csv")
    );
    assert_eq!(config.analytics.peer_top_n, 10);
    assert_eq!(config.analytics.progress_seed, 7);
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_number() {
    clear_config_env();
    env::set_var("PEER_AGE_WINDOW", "five");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("PEER_AGE_WINDOW"));
}

#[test]
#[serial]
fn test_from_env_rejects_out_of_range_weeks() {
    clear_config_env();
    env::set_var("PROGRESS_WEEKS", "60");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
}

#[test]
fn test_config_summary_mentions_sources() {
    let config = ServerConfig::default();
    let summary = config.summary();
    assert!(summary.contains("Data Dir: ."));
    assert!(summary.contains("top 5 within 5 years"));
}
