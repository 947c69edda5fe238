// ABOUTME: HTTP client construction with timeout configuration
// ABOUTME: Builds reqwest clients from the configured backend timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::HttpClientConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create an HTTP client with the given timeouts
///
/// Clone the result to share its connection pool.
///
/// Falls back to a default client if the builder fails (e.g. the TLS
/// backend cannot initialize).
#[must_use]
pub fn client_for(config: &HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(concat!("pierre-training-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
