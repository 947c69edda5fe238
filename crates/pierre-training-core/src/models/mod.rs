// ABOUTME: Training data models shared by the sync client and the CLI
// ABOUTME: Re-exports session types and defines the partial update payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training session, implementation and set types
pub mod training;

/// Validation of user-entered set values
pub mod values;

pub use training::{
    is_contiguous, renumber, Implementation, Positioned, SetEntry, Training, TrainingStatus,
};
pub use values::SetInput;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable fields of a training accepted by the backend's update endpoint
///
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTrainingRequest {
    /// New start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    /// Full replacement list of implementations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementations: Option<Vec<Implementation>>,
    /// Total duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// New lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingStatus>,
}

impl UpdateTrainingRequest {
    /// Auto-save payload: the current implementations and session header,
    /// status in progress
    ///
    /// Notes and duration are sent only when set.
    #[must_use]
    pub fn in_progress(training: &Training) -> Self {
        Self {
            date_time: Some(training.date_time),
            implementations: Some(training.implementations.clone()),
            duration: training.duration,
            notes: training.notes.clone(),
            status: Some(TrainingStatus::InProgress),
        }
    }

    /// Finishing payload: the current implementations, status completed
    #[must_use]
    pub fn completed(training: &Training, duration_secs: u32) -> Self {
        Self {
            implementations: Some(training.implementations.clone()),
            duration: Some(duration_secs),
            status: Some(TrainingStatus::Completed),
            ..Self::default()
        }
    }
}
