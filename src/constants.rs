// ABOUTME: System-wide constants and environment variable names for the training sync client
// ABOUTME: Defaults for debounce timing, HTTP timeouts and backend routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults plus the names of the environment variables that
//! override them. Parsing lives in [`crate::config::environment`].

/// Service identity used in logs
pub mod service_names {
    /// Library/service name
    pub const PIERRE_TRAINING_SYNC: &str = "pierre-training-sync";
    /// CLI binary name
    pub const PIERRE_TRAINING_CLI: &str = "pierre-training-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Base URL of the training backend (without `/api/v1`)
    pub const API_BASE_URL: &str = "PIERRE_API_BASE_URL";
    /// Bearer token for the training backend
    pub const ACCESS_TOKEN: &str = "PIERRE_ACCESS_TOKEN";
    /// Debounce window for auto-save, in milliseconds
    pub const AUTOSAVE_DEBOUNCE_MS: &str = "AUTOSAVE_DEBOUNCE_MS";
    /// Whole-request timeout for backend calls, in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Connect timeout for backend calls, in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default values
pub mod defaults {
    /// Backend base URL for local development
    pub const API_BASE_URL: &str = "http://localhost:8000";
    /// Quiet period before a burst of edits is saved
    pub const AUTOSAVE_DEBOUNCE_MS: u64 = 2000;
    /// Whole-request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Backend REST routes
pub mod routes {
    /// Versioned API prefix appended to the base URL
    pub const API_PREFIX: &str = "/api/v1";
    /// Training collection path (relative to the API prefix)
    pub const TRAININGS: &str = "/trainings";
}

/// HTTP header names
pub mod headers {
    /// Correlation ID sent with every backend call
    pub const REQUEST_ID: &str = "x-request-id";
}
