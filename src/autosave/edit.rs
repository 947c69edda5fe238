// ABOUTME: User edits to an in-progress training, applied atomically to local state
// ABOUTME: Classifies which edits are saved immediately and which are debounced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_training_core::errors::AppResult;
use pierre_training_core::models::{SetInput, Training};

/// A mutating action from the active-training view
///
/// Index fields are 0-based list positions, not `order_index` values.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEdit {
    /// Append an exercise
    AddExercise {
        /// Exercise definition to add
        exercise_id: i64,
    },
    /// Swap the exercise of an entry, keeping its sets
    ChangeExercise {
        /// Entry position
        implementation: usize,
        /// Replacement exercise definition
        exercise_id: i64,
    },
    /// Remove an exercise and all of its sets
    RemoveExercise {
        /// Entry position
        implementation: usize,
    },
    /// Append a set to an exercise
    AddSet {
        /// Entry position
        implementation: usize,
        /// Set values
        set: SetInput,
    },
    /// Overwrite the values of a set
    UpdateSet {
        /// Entry position
        implementation: usize,
        /// Set position within the entry
        set_index: usize,
        /// New set values
        set: SetInput,
    },
    /// Remove a set
    RemoveSet {
        /// Entry position
        implementation: usize,
        /// Set position within the entry
        set_index: usize,
    },
}

impl SessionEdit {
    /// Edits that bypass the debounce window
    ///
    /// Removing an exercise discards all of its sets, so it is persisted at once.
    #[must_use]
    pub const fn saves_immediately(&self) -> bool {
        matches!(self, Self::RemoveExercise { .. })
    }

    /// Short label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddExercise { .. } => "add_exercise",
            Self::ChangeExercise { .. } => "change_exercise",
            Self::RemoveExercise { .. } => "remove_exercise",
            Self::AddSet { .. } => "add_set",
            Self::UpdateSet { .. } => "update_set",
            Self::RemoveSet { .. } => "remove_set",
        }
    }

    /// Apply the edit to `training`
    ///
    /// # Errors
    ///
    /// Returns validation or `ResourceNotFound` errors; `training` is left
    /// unchanged when an error is returned.
    pub fn apply_to(&self, training: &mut Training) -> AppResult<()> {
        match self {
            Self::AddExercise { exercise_id } => {
                training.add_implementation(*exercise_id);
            }
            Self::ChangeExercise {
                implementation,
                exercise_id,
            } => training.change_exercise(*implementation, *exercise_id)?,
            Self::RemoveExercise { implementation } => {
                training.remove_implementation(*implementation)?;
            }
            Self::AddSet {
                implementation,
                set,
            } => {
                training.add_set(*implementation, set)?;
            }
            Self::UpdateSet {
                implementation,
                set_index,
                set,
            } => training.update_set(*implementation, *set_index, set)?,
            Self::RemoveSet {
                implementation,
                set_index,
            } => {
                training.remove_set(*implementation, *set_index)?;
            }
        }
        Ok(())
    }
}
