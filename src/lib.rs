// ABOUTME: Main library entry point for the Pierre training sync client
// ABOUTME: Auto-saves in-progress trainings to the Pierre training backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Sync
//!
//! Client-side persistence for trainings that are being logged live. Edits
//! land in local state at once and are written to the backend through a
//! debounced auto-save; structural deletes are saved immediately.
//!
//! ## Architecture
//!
//! - **Autosave**: coordinator, debounce scheduler and response reconciliation
//! - **Persistence**: `TrainingStore` trait and the REST implementation
//! - **Context**: explicit authentication context for backend calls
//! - **Config**: environment-driven configuration
//!
//! Domain models, validation and analytics live in `pierre-training-core`
//! and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_training_sync::autosave::{AutoSaveCoordinator, SessionEdit};
//! use pierre_training_sync::config::SyncConfig;
//! use pierre_training_sync::context::AuthContext;
//! use pierre_training_sync::persistence::RestTrainingStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SyncConfig::from_env()?;
//!     let auth = config
//!         .access_token
//!         .clone()
//!         .map_or_else(AuthContext::anonymous, AuthContext::with_token);
//!     let store = Arc::new(RestTrainingStore::new(&config, auth));
//!     let session = AutoSaveCoordinator::load(42, store, config.autosave).await?;
//!
//!     session.apply(SessionEdit::AddExercise { exercise_id: 7 }).await?;
//!     session.manual_save().await?;
//!     Ok(())
//! }
//! ```

/// Auto-save coordination for in-progress trainings
pub mod autosave;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Request context passed explicitly to backend clients
pub mod context;

/// Structured logging setup
pub mod logging;

/// Training persistence backends
pub mod persistence;

/// Shared utilities
pub mod utils;

pub use pierre_training_core::{analytics, errors, models};
