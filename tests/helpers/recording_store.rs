// ABOUTME: In-memory training store that records every update for assertions
// ABOUTME: Supports gating responses and injecting failures to simulate slow or failing backends

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use chrono::Utc;
use pierre_training_sync::errors::{AppError, AppResult};
use pierre_training_sync::models::{Training, UpdateTrainingRequest};
use pierre_training_sync::persistence::TrainingStore;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::{watch, Semaphore};

/// One update call as received by the store
#[derive(Debug, Clone)]
pub struct RecordedUpdate {
    /// Target training
    pub training_id: i64,
    /// Submitted payload
    pub request: UpdateTrainingRequest,
}

/// Recording store for testing the auto-save flow without a backend
///
/// Updates are applied to an in-memory copy of each training and echoed back
/// with a fresh `updated_at`, the way the backend answers.
///
/// # Gating
///
/// A gated store records an update as soon as it arrives but holds the
/// response until [`RecordingStore::release`] hands out a permit. This keeps
/// a save "in flight" while a test makes further edits.
pub struct RecordingStore {
    trainings: Mutex<HashMap<i64, Training>>,
    updates: Mutex<Vec<RecordedUpdate>>,
    update_count: watch::Sender<usize>,
    failures: Mutex<VecDeque<AppError>>,
    gate: Option<Semaphore>,
}

impl RecordingStore {
    fn build(training: Training, gate: Option<Semaphore>) -> Arc<Self> {
        let (update_count, _) = watch::channel(0);
        Arc::new(Self {
            trainings: Mutex::new(HashMap::from([(training.id, training)])),
            updates: Mutex::new(Vec::new()),
            update_count,
            failures: Mutex::new(VecDeque::new()),
            gate,
        })
    }

    /// Store answering immediately
    pub fn with_training(training: Training) -> Arc<Self> {
        Self::build(training, None)
    }

    /// Store holding every response until released
    pub fn gated(training: Training) -> Arc<Self> {
        Self::build(training, Some(Semaphore::new(0)))
    }

    /// Let `responses` held updates answer
    pub fn release(&self, responses: usize) {
        self.gate
            .as_ref()
            .expect("release called on an ungated store")
            .add_permits(responses);
    }

    /// Make the next update fail with `error`
    pub fn fail_next(&self, error: AppError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Number of update calls received so far
    pub fn update_count(&self) -> usize {
        *self.update_count.borrow()
    }

    /// Every update received, in arrival order
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// The most recent update
    pub fn last_update(&self) -> RecordedUpdate {
        self.updates
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no update recorded")
    }

    /// Backend-side copy of a training
    pub fn stored(&self, training_id: i64) -> Training {
        self.trainings.lock().unwrap()[&training_id].clone()
    }

    /// Wait until at least `count` updates have arrived
    pub async fn wait_for_updates(&self, count: usize) {
        let mut receiver = self.update_count.subscribe();
        receiver.wait_for(|seen| *seen >= count).await.unwrap();
    }

    fn record(&self, training_id: i64, request: &UpdateTrainingRequest) {
        self.updates.lock().unwrap().push(RecordedUpdate {
            training_id,
            request: request.clone(),
        });
        self.update_count.send_modify(|count| *count += 1);
    }

    fn apply(&self, training_id: i64, request: &UpdateTrainingRequest) -> AppResult<Training> {
        let mut trainings = self.trainings.lock().unwrap();
        let training = trainings
            .get_mut(&training_id)
            .ok_or_else(|| AppError::not_found(format!("Training {training_id}")))?;

        if let Some(date_time) = request.date_time {
            training.date_time = date_time;
        }
        if let Some(implementations) = &request.implementations {
            training.implementations.clone_from(implementations);
        }
        if let Some(duration) = request.duration {
            training.duration = Some(duration);
        }
        if let Some(notes) = &request.notes {
            training.notes = Some(notes.clone());
        }
        if let Some(status) = request.status {
            training.status = status;
        }
        training.updated_at = Some(Utc::now());
        Ok(training.clone())
    }
}

#[async_trait]
impl TrainingStore for RecordingStore {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn get(&self, training_id: i64) -> AppResult<Training> {
        self.trainings
            .lock()
            .unwrap()
            .get(&training_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Training {training_id}")))
    }

    async fn update(
        &self,
        training_id: i64,
        request: &UpdateTrainingRequest,
    ) -> AppResult<Training> {
        self.record(training_id, request);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(error) = failure {
            return Err(error);
        }
        self.apply(training_id, request)
    }
}
