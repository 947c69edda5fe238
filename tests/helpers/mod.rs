// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-memory recording store and training fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod recording_store;
pub mod training_fixtures;
