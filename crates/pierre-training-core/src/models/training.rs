// ABOUTME: Training session, exercise implementation and set models with edit operations
// ABOUTME: Keeps position indices contiguous (1..N) across every add and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::values::SetInput;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Created ahead of time, not started
    #[default]
    Planned,
    /// Being edited in the active-training view
    InProgress,
    /// Finalized by the user
    Completed,
    /// Planned but never performed
    Skipped,
}

impl TrainingStatus {
    /// Whether the training may still be edited
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Planned | Self::InProgress)
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned => write!(f, "planned"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// One performed set of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// 1-based position within the implementation
    pub order_index: u32,
    /// Weight lifted, in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Rest after the set, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    /// Duration of a timed set, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
}

impl SetEntry {
    /// Build a set at `order_index` from validated input
    #[must_use]
    pub const fn from_input(order_index: u32, input: &SetInput) -> Self {
        Self {
            order_index,
            weight: input.weight,
            reps: input.reps,
            rest_time: input.rest_time,
            duration: input.duration,
            rpe: input.rpe,
        }
    }

    /// Weight times reps for this set
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// One exercise performed within a training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    /// Referenced exercise definition
    pub exercise_id: i64,
    /// 1-based position within the training
    pub order_index: u32,
    /// Sets in performed order
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl Implementation {
    /// Empty implementation of `exercise_id` at `order_index`
    #[must_use]
    pub const fn new(exercise_id: i64, order_index: u32) -> Self {
        Self {
            exercise_id,
            order_index,
            sets: Vec::new(),
        }
    }

    fn set_mut(&mut self, set_index: usize) -> AppResult<&mut SetEntry> {
        let len = self.sets.len();
        self.sets
            .get_mut(set_index)
            .ok_or_else(|| AppError::not_found(format!("Set {set_index} (of {len})")))
    }
}

/// A workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Backend identifier
    pub id: i64,
    /// Owning user
    #[serde(default)]
    pub user_id: i64,
    /// Template the training was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_template_id: Option<i64>,
    /// Start of the session
    pub date_time: DateTime<Utc>,
    /// Total duration in seconds, set when finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: TrainingStatus,
    /// Exercises in performed order
    #[serde(default)]
    pub implementations: Vec<Implementation>,
    /// Last modification time assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Training {
    /// Empty in-progress training
    #[must_use]
    pub fn new(id: i64, user_id: i64, date_time: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            training_template_id: None,
            date_time,
            duration: None,
            notes: None,
            status: TrainingStatus::InProgress,
            implementations: Vec::new(),
            updated_at: None,
        }
    }

    fn implementation_mut(&mut self, index: usize) -> AppResult<&mut Implementation> {
        let len = self.implementations.len();
        self.implementations
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("Implementation {index} (of {len})")))
    }

    /// Append an empty implementation of `exercise_id`
    ///
    /// Returns the list position of the new entry.
    pub fn add_implementation(&mut self, exercise_id: i64) -> usize {
        let order_index = next_order_index(self.implementations.len());
        self.implementations
            .push(Implementation::new(exercise_id, order_index));
        self.implementations.len() - 1
    }

    /// Point the implementation at `index` to another exercise, keeping its sets
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when `index` is out of range.
    pub fn change_exercise(&mut self, index: usize, exercise_id: i64) -> AppResult<()> {
        self.implementation_mut(index)?.exercise_id = exercise_id;
        Ok(())
    }

    /// Remove the implementation at `index` and renumber the rest
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when `index` is out of range.
    pub fn remove_implementation(&mut self, index: usize) -> AppResult<Implementation> {
        if index >= self.implementations.len() {
            return Err(AppError::not_found(format!(
                "Implementation {index} (of {})",
                self.implementations.len()
            )));
        }
        let removed = self.implementations.remove(index);
        renumber(&mut self.implementations);
        Ok(removed)
    }

    /// Append a set to the implementation at `implementation`
    ///
    /// Returns the list position of the new set.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input and `ResourceNotFound` for a
    /// bad index. Nothing is modified on error.
    pub fn add_set(&mut self, implementation: usize, input: &SetInput) -> AppResult<usize> {
        input.validate()?;
        let target = self.implementation_mut(implementation)?;
        let order_index = next_order_index(target.sets.len());
        target.sets.push(SetEntry::from_input(order_index, input));
        Ok(target.sets.len() - 1)
    }

    /// Replace the values of an existing set, keeping its position
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input and `ResourceNotFound` for a
    /// bad index. Nothing is modified on error.
    pub fn update_set(
        &mut self,
        implementation: usize,
        set_index: usize,
        input: &SetInput,
    ) -> AppResult<()> {
        input.validate()?;
        let set = self.implementation_mut(implementation)?.set_mut(set_index)?;
        *set = SetEntry::from_input(set.order_index, input);
        Ok(())
    }

    /// Remove a set and renumber the remaining sets of that implementation
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when either index is out of range.
    pub fn remove_set(&mut self, implementation: usize, set_index: usize) -> AppResult<SetEntry> {
        let target = self.implementation_mut(implementation)?;
        if set_index >= target.sets.len() {
            return Err(AppError::not_found(format!(
                "Set {set_index} (of {})",
                target.sets.len()
            )));
        }
        let removed = target.sets.remove(set_index);
        renumber(&mut target.sets);
        Ok(removed)
    }

    /// Check that implementations and every set list are numbered 1..N
    #[must_use]
    pub fn positions_are_contiguous(&self) -> bool {
        is_contiguous(&self.implementations)
            && self
                .implementations
                .iter()
                .all(|implementation| is_contiguous(&implementation.sets))
    }

    /// Find the list position of the first implementation of `exercise_id`
    #[must_use]
    pub fn position_of_exercise(&self, exercise_id: i64) -> Option<usize> {
        self.implementations
            .iter()
            .position(|implementation| implementation.exercise_id == exercise_id)
    }

    /// Total number of sets across all implementations
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.implementations
            .iter()
            .map(|implementation| implementation.sets.len())
            .sum()
    }
}

/// Entries that carry a 1-based position within their list
pub trait Positioned {
    /// Current position
    fn order_index(&self) -> u32;
    /// Overwrite the position
    fn set_order_index(&mut self, order_index: u32);
}

impl Positioned for Implementation {
    fn order_index(&self) -> u32 {
        self.order_index
    }

    fn set_order_index(&mut self, order_index: u32) {
        self.order_index = order_index;
    }
}

impl Positioned for SetEntry {
    fn order_index(&self) -> u32 {
        self.order_index
    }

    fn set_order_index(&mut self, order_index: u32) {
        self.order_index = order_index;
    }
}

/// Renumber entries to 1..N in their current list order
pub fn renumber<T: Positioned>(entries: &mut [T]) {
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.set_order_index(next_order_index(position));
    }
}

/// Whether entries are numbered exactly 1..N in list order
#[must_use]
pub fn is_contiguous<T: Positioned>(entries: &[T]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(position, entry)| entry.order_index() == next_order_index(position))
}

fn next_order_index(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |n| n.saturating_add(1))
}
