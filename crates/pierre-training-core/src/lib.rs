// ABOUTME: Core types for the Pierre training session sync client
// ABOUTME: Foundation crate with error handling, training models and strength analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Core
//!
//! Foundation crate shared by the training sync client and its CLI. It holds
//! no I/O and no async code, so the domain rules can be tested in isolation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Training sessions, exercise implementations and sets
//! - **analytics**: One-rep-max estimation and training volume

/// Unified error handling system with standard error codes
pub mod errors;

/// Training session data models and edit operations
pub mod models;

/// Strength analytics (1RM formulas, volume)
pub mod analytics;

pub use errors::{AppError, AppResult, ErrorCode};
