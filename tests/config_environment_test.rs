// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults and error reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_training_sync::config::{AutoSaveConfig, Environment, SyncConfig};
use pierre_training_sync::constants::env_vars;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_VARS: [&str; 6] = [
    env_vars::API_BASE_URL,
    env_vars::ACCESS_TOKEN,
    env_vars::AUTOSAVE_DEBOUNCE_MS,
    env_vars::HTTP_TIMEOUT_SECS,
    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
    env_vars::ENVIRONMENT,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = SyncConfig::from_env().unwrap();

    assert_eq!(config.api_root(), "http://localhost:8000/api/v1");
    assert!(config.access_token.is_none());
    assert_eq!(config.autosave.debounce, Duration::from_millis(2000));
    assert_eq!(config.http_client.timeout_secs, 30);
    assert_eq!(config.http_client.connect_timeout_secs, 10);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "https://api.pierre.example.com/");
    env::set_var(env_vars::ACCESS_TOKEN, "abc123");
    env::set_var(env_vars::AUTOSAVE_DEBOUNCE_MS, "750");
    env::set_var(env_vars::HTTP_TIMEOUT_SECS, "5");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = SyncConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_root(), "https://api.pierre.example.com/api/v1");
    assert_eq!(config.access_token.as_deref(), Some("abc123"));
    assert_eq!(config.autosave, AutoSaveConfig::with_debounce(Duration::from_millis(750)));
    assert_eq!(config.http_client.timeout_secs, 5);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_blank_token_is_ignored() {
    clear_env();
    env::set_var(env_vars::ACCESS_TOKEN, "   ");
    let config = SyncConfig::from_env().unwrap();
    clear_env();

    assert!(config.access_token.is_none());
}

#[test]
#[serial]
fn test_invalid_number_names_the_variable() {
    clear_env();
    env::set_var(env_vars::AUTOSAVE_DEBOUNCE_MS, "soon");
    let error = SyncConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains(env_vars::AUTOSAVE_DEBOUNCE_MS));
}

#[test]
#[serial]
fn test_invalid_base_url_is_rejected() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "ftp://pierre.example.com");
    let result = SyncConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("TEST"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
fn test_autosave_config_serializes_milliseconds() {
    let json = serde_json::to_value(AutoSaveConfig::default()).unwrap();
    assert_eq!(json, serde_json::json!({"debounce": 2000}));
}
