// ABOUTME: Persistence collaborator interface for training sessions
// ABOUTME: Abstracts the backend so the coordinator can be driven by REST or test stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training persistence
//!
//! The auto-save coordinator only needs to push a partial training and get
//! back the backend's authoritative copy. [`TrainingStore`] captures exactly
//! that, plus the initial load.

/// REST implementation backed by the training API
pub mod rest;

pub use rest::RestTrainingStore;

use async_trait::async_trait;
use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{Training, UpdateTrainingRequest};

/// Backend system of record for trainings
#[async_trait]
pub trait TrainingStore: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Load a training by ID
    async fn get(&self, training_id: i64) -> AppResult<Training>;

    /// Apply the mutable fields in `request` and return the stored training
    async fn update(&self, training_id: i64, request: &UpdateTrainingRequest)
        -> AppResult<Training>;
}
