// ABOUTME: Environment configuration for backend location, credentials and auto-save timing
// ABOUTME: Parses and validates environment variables into strongly typed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Environment type for logging and other behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Auto-save timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSaveConfig {
    /// Quiet period after the last edit before a save is dispatched
    #[serde(with = "duration_millis")]
    pub debounce: Duration,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(defaults::AUTOSAVE_DEBOUNCE_MS),
        }
    }
}

impl AutoSaveConfig {
    /// Config with a custom debounce window
    #[must_use]
    pub const fn with_debounce(debounce: Duration) -> Self {
        Self { debounce }
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Backend base URL, without the `/api/v1` prefix
    pub api_base_url: Url,
    /// Bearer token, when the caller is already authenticated
    pub access_token: Option<String>,
    /// Auto-save timing
    pub autosave: AutoSaveConfig,
    /// HTTP client timeouts
    pub http_client: HttpClientConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl SyncConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(env_vars::API_BASE_URL)
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_owned());
        let api_base_url = parse_base_url(&base_url)?;

        let access_token = env::var(env_vars::ACCESS_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty());

        let debounce_ms = parse_u64_var(
            env_vars::AUTOSAVE_DEBOUNCE_MS,
            defaults::AUTOSAVE_DEBOUNCE_MS,
        )?;
        if debounce_ms == 0 {
            warn!("AUTOSAVE_DEBOUNCE_MS is 0; every edit will be saved immediately");
        }

        let config = Self {
            api_base_url,
            access_token,
            autosave: AutoSaveConfig::with_debounce(Duration::from_millis(debounce_ms)),
            http_client: HttpClientConfig {
                timeout_secs: parse_u64_var(
                    env_vars::HTTP_TIMEOUT_SECS,
                    defaults::HTTP_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_u64_var(
                    env_vars::HTTP_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?,
            },
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
        };

        info!(
            api_base_url = %config.api_base_url,
            authenticated = config.access_token.is_some(),
            debounce_ms,
            environment = %config.environment,
            "Training sync configuration loaded"
        );
        Ok(config)
    }

    /// Configuration pointing at `api_base_url` with every other setting defaulted
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http(s) URL.
    pub fn for_base_url(api_base_url: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            access_token: None,
            autosave: AutoSaveConfig::default(),
            http_client: HttpClientConfig::default(),
            environment: Environment::default(),
        })
    }

    /// Versioned API root, e.g. `http://localhost:8000/api/v1`
    #[must_use]
    pub fn api_root(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            crate::constants::routes::API_PREFIX
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .with_context(|| format!("Invalid {} value: {raw}", env_vars::API_BASE_URL))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "{} must use http or https, got {}",
            env_vars::API_BASE_URL,
            url.scheme()
        );
    }
    Ok(url)
}

fn parse_u64_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {name} value: {raw}")),
        Err(_) => Ok(default),
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
