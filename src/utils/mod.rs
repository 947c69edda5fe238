// ABOUTME: Utility module exports for shared helper functions
// ABOUTME: Holds HTTP client construction shared by the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared HTTP client construction
pub mod http_client;
