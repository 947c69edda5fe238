// ABOUTME: Configuration management module for the training sync client
// ABOUTME: Re-exports environment-driven client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Pierre training sync
//!
//! Configuration is environment-only: every setting has a default and can be
//! overridden through the variables listed in [`crate::constants::env_vars`].

/// Environment-based client configuration
pub mod environment;

pub use environment::{AutoSaveConfig, Environment, HttpClientConfig, SyncConfig};
