// ABOUTME: Training session commands for pierre-training-cli
// ABOUTME: Loads a training, applies one edit through the auto-save coordinator and flushes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use pierre_training_sync::{
    autosave::{AutoSaveCoordinator, SessionEdit},
    config::{AutoSaveConfig, SyncConfig},
    context::AuthContext,
    models::SetInput,
    persistence::{RestTrainingStore, TrainingStore},
};
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{display_save_status, display_training};

/// Set values as entered on the command line
pub struct SetValues {
    pub weight: f64,
    pub reps: u32,
    pub rpe: Option<u8>,
    pub rest_secs: Option<u32>,
}

impl SetValues {
    fn to_input(&self) -> SetInput {
        let mut input = SetInput::new(self.weight, self.reps);
        input.rpe = self.rpe;
        input.rest_time = self.rest_secs;
        input
    }
}

/// Backend access shared by all session commands
pub struct SessionClient {
    store: Arc<dyn TrainingStore>,
    autosave: AutoSaveConfig,
}

impl SessionClient {
    pub fn new(config: &SyncConfig, auth: AuthContext) -> Self {
        Self {
            store: Arc::new(RestTrainingStore::new(config, auth)),
            autosave: config.autosave,
        }
    }

    async fn open(&self, training_id: i64) -> Result<AutoSaveCoordinator> {
        let session =
            AutoSaveCoordinator::load(training_id, Arc::clone(&self.store), self.autosave).await?;
        if session.is_finished() {
            bail!(
                "Training {training_id} is {} and can no longer be edited",
                session.session().status
            );
        }
        Ok(session)
    }

    /// Print a training as stored on the backend
    pub async fn show(&self, training_id: i64, json: bool) -> Result<()> {
        let training = self.store.get(training_id).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&training)?);
        } else {
            display_training(&training);
        }
        Ok(())
    }

    /// Log a set, adding the exercise first when the training does not contain it
    pub async fn log_set(&self, training_id: i64, exercise_id: i64, values: SetValues) -> Result<()> {
        let session = self.open(training_id).await?;
        let existing = session.session().position_of_exercise(exercise_id);
        let implementation = match existing {
            Some(index) => index,
            None => {
                session.apply(SessionEdit::AddExercise { exercise_id }).await?;
                session.session().implementations.len() - 1
            }
        };
        info!(training_id, exercise_id, implementation, "Logging set");
        edit_and_save(
            &session,
            SessionEdit::AddSet {
                implementation,
                set: values.to_input(),
            },
        )
        .await
    }

    pub async fn update_set(
        &self,
        training_id: i64,
        position: usize,
        set: usize,
        values: SetValues,
    ) -> Result<()> {
        let session = self.open(training_id).await?;
        edit_and_save(
            &session,
            SessionEdit::UpdateSet {
                implementation: to_index(position, "exercise")?,
                set_index: to_index(set, "set")?,
                set: values.to_input(),
            },
        )
        .await
    }

    pub async fn remove_exercise(&self, training_id: i64, position: usize) -> Result<()> {
        let session = self.open(training_id).await?;
        edit_and_save(
            &session,
            SessionEdit::RemoveExercise {
                implementation: to_index(position, "exercise")?,
            },
        )
        .await
    }

    pub async fn remove_set(&self, training_id: i64, position: usize, set: usize) -> Result<()> {
        let session = self.open(training_id).await?;
        edit_and_save(
            &session,
            SessionEdit::RemoveSet {
                implementation: to_index(position, "exercise")?,
                set_index: to_index(set, "set")?,
            },
        )
        .await
    }

    /// Complete the training; later edits are refused
    pub async fn finish(&self, training_id: i64, duration_secs: Option<u32>) -> Result<()> {
        let session = self.open(training_id).await?;
        let training = session.finish(duration_secs).await?;
        println!("\nTraining {training_id} completed");
        display_training(&training);
        Ok(())
    }
}

/// Apply `edit` and make sure it reached the backend before the process exits
async fn edit_and_save(session: &AutoSaveCoordinator, edit: SessionEdit) -> Result<()> {
    let immediate = edit.saves_immediately();
    session.apply(edit).await?;
    if !immediate {
        session.manual_save().await?;
    }
    display_training(&session.session());
    display_save_status(&session.save_status());
    Ok(())
}

/// Convert a 1-based position from the command line into a list index
fn to_index(position: usize, what: &str) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("{what} positions start at 1"))
}
