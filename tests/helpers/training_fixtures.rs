// ABOUTME: Training fixtures for integration tests
// ABOUTME: Builds in-progress trainings with a given list of exercises and sets

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Duration, Utc};
use pierre_training_sync::models::{SetInput, Training};

/// Training ID used by fixtures
pub const TRAINING_ID: i64 = 42;

/// Owner used by fixtures
pub const USER_ID: i64 = 7;

/// In-progress training started an hour ago with one entry per exercise
pub fn training_with_exercises(exercises: &[i64]) -> Training {
    let mut training = Training::new(TRAINING_ID, USER_ID, Utc::now() - Duration::hours(1));
    for exercise in exercises {
        training.add_implementation(*exercise);
    }
    training
}

/// Like [`training_with_exercises`], with `sets_per_exercise` sets of 60 kg x 8 on each
pub fn training_with_sets(exercises: &[i64], sets_per_exercise: usize) -> Training {
    let mut training = training_with_exercises(exercises);
    for index in 0..training.implementations.len() {
        for _ in 0..sets_per_exercise {
            training.add_set(index, &SetInput::new(60.0, 8)).unwrap();
        }
    }
    training
}

/// Exercise IDs in list order
pub fn exercise_ids(training: &Training) -> Vec<i64> {
    training
        .implementations
        .iter()
        .map(|implementation| implementation.exercise_id)
        .collect()
}

/// Order indices in list order
pub fn order_indices(training: &Training) -> Vec<u32> {
    training
        .implementations
        .iter()
        .map(|implementation| implementation.order_index)
        .collect()
}
