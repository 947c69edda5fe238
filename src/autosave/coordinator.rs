// ABOUTME: Auto-save coordinator for an in-progress training session
// ABOUTME: Buffers local edits, debounces saves and reconciles responses against newer edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Auto-save coordinator
//!
//! Owns the local copy of a training while it is being edited. Every edit
//! bumps a local revision and arms the debounce; removing an exercise is
//! saved at once. When a save response arrives it replaces local state only
//! if [`reconcile`] says no newer edit happened in the meantime.
//!
//! Failures never touch local state: the error message is published on the
//! status channel and returned from the explicit save paths. The next edit
//! or manual save retries with the latest state.

use super::edit::SessionEdit;
use super::reconcile::{reconcile, Reconciliation, SaveSnapshot};
use super::scheduler::{SaveScheduler, SaveTask};
use crate::config::AutoSaveConfig;
use crate::persistence::TrainingStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_training_core::errors::{AppError, AppResult};
use pierre_training_core::models::{Training, UpdateTrainingRequest};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observable save state for the editing view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveStatus {
    /// Saves dispatched but not yet answered
    pub in_flight: usize,
    /// Time of the last successful save
    pub last_saved: Option<DateTime<Utc>>,
    /// User-displayable message of the last failed save, cleared on success
    pub last_error: Option<String>,
    /// Number of successful saves so far
    pub saves_completed: u64,
}

impl SaveStatus {
    /// Whether a save is currently in flight
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.in_flight > 0
    }
}

struct SessionState {
    training: Training,
    revision: u64,
    finished: bool,
}

/// Shared session state; the save routine the scheduler dispatches
struct ActiveSession {
    state: Mutex<SessionState>,
    store: Arc<dyn TrainingStore>,
    status: watch::Sender<SaveStatus>,
}

impl ActiveSession {
    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Training session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn begin_save(&self) {
        self.status.send_modify(|status| status.in_flight += 1);
    }

    fn record_success(&self) {
        self.status.send_modify(|status| {
            status.in_flight = status.in_flight.saturating_sub(1);
            status.last_saved = Some(Utc::now());
            status.last_error = None;
            status.saves_completed += 1;
        });
    }

    fn record_failure(&self, error: &AppError) {
        let message = error.user_message();
        self.status.send_modify(|status| {
            status.in_flight = status.in_flight.saturating_sub(1);
            status.last_error = Some(message);
        });
    }

    async fn drain_in_flight(&self, training_id: i64) {
        let mut status = self.status.subscribe();
        let drained = status.wait_for(|s| s.in_flight == 0).await.map(|_| ());
        if let Err(e) = drained {
            warn!(training_id, error = %e, "Save status closed while waiting for in-flight saves");
        }
    }

    async fn persist(&self) -> AppResult<()> {
        let snapshot = {
            let state = self.lock_state();
            if state.finished {
                debug!(
                    training_id = state.training.id,
                    "Training finished, skipping auto-save"
                );
                return Ok(());
            }
            // Counted under the lock so `finish` waits for every save that got past the check
            self.begin_save();
            SaveSnapshot {
                training: state.training.clone(),
                revision: state.revision,
            }
        };

        let training_id = snapshot.training.id;
        let request = UpdateTrainingRequest::in_progress(&snapshot.training);
        debug!(
            training_id,
            revision = snapshot.revision,
            implementations = snapshot.training.implementations.len(),
            store = self.store.name(),
            "Dispatching training save"
        );

        match self.store.update(training_id, &request).await {
            Ok(saved) => {
                let outcome = self.apply_response(&snapshot, saved);
                self.record_success();
                info!(
                    training_id,
                    revision = snapshot.revision,
                    accepted = outcome.is_accepted(),
                    outcome = ?outcome,
                    "Training saved"
                );
                Ok(())
            }
            Err(e) => {
                self.record_failure(&e);
                warn!(
                    training_id,
                    revision = snapshot.revision,
                    transport = e.code.is_transport(),
                    error = %e,
                    "Training save failed, keeping local edits"
                );
                Err(e)
            }
        }
    }

    fn apply_response(&self, snapshot: &SaveSnapshot, saved: Training) -> Reconciliation {
        let mut state = self.lock_state();
        if state.finished {
            return Reconciliation::KeptLocal;
        }
        let outcome = reconcile(&state.training, state.revision, snapshot, &saved);
        if outcome.is_accepted() {
            state.training = saved;
        }
        outcome
    }
}

#[async_trait]
impl SaveTask for ActiveSession {
    async fn save(&self) -> AppResult<()> {
        self.persist().await
    }
}

/// Auto-save coordinator for one training
///
/// Cheap to clone; clones share the session and the debounce timer.
#[derive(Clone)]
pub struct AutoSaveCoordinator {
    session: Arc<ActiveSession>,
    scheduler: Arc<SaveScheduler>,
    config: AutoSaveConfig,
}

impl AutoSaveCoordinator {
    /// Start coordinating saves for `training`
    #[must_use]
    pub fn new(training: Training, store: Arc<dyn TrainingStore>, config: AutoSaveConfig) -> Self {
        let (status, _) = watch::channel(SaveStatus::default());
        let finished = !training.status.is_editable();
        let session = Arc::new(ActiveSession {
            state: Mutex::new(SessionState {
                training,
                revision: 0,
                finished,
            }),
            store,
            status,
        });
        let scheduler = Arc::new(SaveScheduler::new(
            Arc::clone(&session) as Arc<dyn SaveTask>
        ));
        Self {
            session,
            scheduler,
            config,
        }
    }

    /// Load `training_id` from `store` and start coordinating it
    ///
    /// # Errors
    ///
    /// Returns the store's error if the training cannot be loaded.
    pub async fn load(
        training_id: i64,
        store: Arc<dyn TrainingStore>,
        config: AutoSaveConfig,
    ) -> AppResult<Self> {
        let training = store.get(training_id).await?;
        Ok(Self::new(training, store, config))
    }

    /// Copy of the current local training
    #[must_use]
    pub fn session(&self) -> Training {
        self.session.lock_state().training.clone()
    }

    /// Local revision; increases with every accepted edit
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.session.lock_state().revision
    }

    /// Whether the training was finished through this coordinator (or loaded finished)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.lock_state().finished
    }

    /// Current save status
    #[must_use]
    pub fn save_status(&self) -> SaveStatus {
        self.session.status.borrow().clone()
    }

    /// Subscribe to save status changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.session.status.subscribe()
    }

    /// Whether a debounced save is armed
    #[must_use]
    pub fn has_pending_save(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Replace local state with `training` (one revision step)
    fn replace_session(&self, training: Training) -> AppResult<()> {
        let mut state = self.session.lock_state();
        ensure_editable(&state)?;
        if training.id != state.training.id {
            return Err(AppError::invalid_input(format!(
                "Training {} cannot replace session for training {}",
                training.id, state.training.id
            )));
        }
        state.training = training;
        state.revision += 1;
        Ok(())
    }

    /// Record `training` as the latest local state and (re)arm the debounce
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` after the training was finished and
    /// `InvalidInput` if `training` belongs to another session.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the debounce timer is
    /// spawned onto it.
    pub fn schedule_save(&self, training: Training) -> AppResult<()> {
        self.replace_session(training)?;
        self.scheduler.schedule(self.config.debounce);
        Ok(())
    }

    /// Record `training` as the latest local state and save it immediately
    ///
    /// Any pending debounced save is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::schedule_save`], or the save error.
    pub async fn save_now(&self, training: Training) -> AppResult<()> {
        self.replace_session(training)?;
        self.scheduler.flush().await
    }

    /// Save the current local state immediately (explicit user action)
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` after the training was finished, or the save
    /// error.
    pub async fn manual_save(&self) -> AppResult<()> {
        ensure_editable(&self.session.lock_state())?;
        self.scheduler.flush().await
    }

    /// Apply a user edit to local state and schedule its persistence
    ///
    /// # Errors
    ///
    /// Returns validation errors (local state untouched), `ResourceLocked`
    /// after the training was finished, or the save error for edits that are
    /// saved immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the debounce timer is
    /// spawned onto it.
    pub async fn apply(&self, edit: SessionEdit) -> AppResult<()> {
        let revision = {
            let mut state = self.session.lock_state();
            ensure_editable(&state)?;
            edit.apply_to(&mut state.training)?;
            state.revision += 1;
            state.revision
        };
        debug!(edit = edit.kind(), revision, "Applied training edit");

        if edit.saves_immediately() {
            self.scheduler.flush().await
        } else {
            self.scheduler.schedule(self.config.debounce);
            Ok(())
        }
    }

    /// Finish the training: persist it as completed and stop auto-saving
    ///
    /// Cancels the pending debounced save and waits for saves already in
    /// flight, so the completion request is the last write for the training.
    /// It carries the current implementations so no edit is lost. Responses
    /// to the drained saves are not applied. `duration_secs` defaults to
    /// the time elapsed since the training's start. On failure the session
    /// stays editable and can be finished again.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if already finished, or the save error.
    pub async fn finish(&self, duration_secs: Option<u32>) -> AppResult<Training> {
        let training = {
            let mut state = self.session.lock_state();
            ensure_editable(&state)?;
            state.finished = true;
            state.training.clone()
        };
        self.scheduler.cancel();
        self.session.drain_in_flight(training.id).await;

        let duration = duration_secs.unwrap_or_else(|| elapsed_secs(training.date_time));
        let request = UpdateTrainingRequest::completed(&training, duration);

        self.session.begin_save();
        match self.session.store.update(training.id, &request).await {
            Ok(saved) => {
                self.session.record_success();
                self.session.lock_state().training = saved.clone();
                info!(
                    training_id = training.id,
                    duration_secs = duration,
                    "Training finished"
                );
                Ok(saved)
            }
            Err(e) => {
                self.session.record_failure(&e);
                self.session.lock_state().finished = false;
                warn!(training_id = training.id, error = %e, "Failed to finish training");
                Err(e)
            }
        }
    }
}

fn ensure_editable(state: &SessionState) -> AppResult<()> {
    if state.finished {
        return Err(AppError::locked(format!(
            "Training {} is finished and can no longer be edited",
            state.training.id
        )));
    }
    Ok(())
}

fn elapsed_secs(started: DateTime<Utc>) -> u32 {
    let elapsed = (Utc::now() - started).num_seconds().max(0);
    u32::try_from(elapsed).unwrap_or(u32::MAX)
}
