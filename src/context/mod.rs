// ABOUTME: Explicitly passed contexts replacing process-wide mutable state
// ABOUTME: Carries the caller's backend credentials into the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dependency contexts
//!
//! Credentials are handed to each component that needs them instead of
//! living in global storage, so two sessions with different users can run in
//! one process and tests never leak tokens between each other.

pub mod auth;

pub use auth::AuthContext;
