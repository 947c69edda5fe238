// ABOUTME: Cancellable trailing-edge debounce for saves with an immediate flush path
// ABOUTME: One pending timer at most; fired timers detach so in-flight saves are never aborted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Save scheduling
//!
//! [`SaveScheduler`] is the single entry point for dispatching saves:
//!
//! - [`SaveScheduler::schedule`] (re)arms a timer; a second call inside the
//!   window aborts the first timer, so a burst of edits produces one save.
//! - [`SaveScheduler::flush`] cancels any pending timer and saves at once.
//!
//! When a timer fires it removes itself from the scheduler before starting
//! the save. A later `schedule`/`flush`/`cancel` therefore only ever aborts
//! a sleeping timer, never a request already on the wire.

use async_trait::async_trait;
use pierre_training_core::errors::AppResult;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The save routine a scheduler dispatches
#[async_trait]
pub trait SaveTask: Send + Sync + 'static {
    /// Persist the current state
    async fn save(&self) -> AppResult<()>;
}

struct PendingTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct TimerSlot {
    next_generation: u64,
    pending: Option<PendingTimer>,
}

/// Debounce/flush scheduler for one [`SaveTask`]
pub struct SaveScheduler {
    task: Arc<dyn SaveTask>,
    slot: Arc<Mutex<TimerSlot>>,
}

impl SaveScheduler {
    /// Create a scheduler for `task`
    #[must_use]
    pub fn new(task: Arc<dyn SaveTask>) -> Self {
        Self {
            task,
            slot: Arc::new(Mutex::new(TimerSlot::default())),
        }
    }

    /// Arm the timer to save after `delay`, replacing any pending timer
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, delay: Duration) {
        let mut slot = lock_slot(&self.slot);
        if let Some(previous) = slot.pending.take() {
            previous.handle.abort();
            debug!(
                generation = previous.generation,
                "Pending save superseded by newer edit"
            );
        }

        slot.next_generation += 1;
        let generation = slot.next_generation;
        let task = Arc::clone(&self.task);
        let timer_slot = Arc::clone(&self.slot);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !disarm(&timer_slot, generation) {
                return;
            }
            debug!(generation, "Debounce window elapsed, saving");
            // Failures are recorded by the task itself
            if let Err(e) = task.save().await {
                debug!(generation, error = %e, "Debounced save failed");
            }
        });

        slot.pending = Some(PendingTimer { generation, handle });
    }

    /// Abort the pending timer, if any
    ///
    /// Returns whether a timer was pending.
    pub fn cancel(&self) -> bool {
        lock_slot(&self.slot).pending.take().is_some_and(|pending| {
            pending.handle.abort();
            debug!(generation = pending.generation, "Pending save cancelled");
            true
        })
    }

    /// Cancel the pending timer and save immediately
    ///
    /// # Errors
    ///
    /// Returns the save task's error.
    pub async fn flush(&self) -> AppResult<()> {
        self.cancel();
        self.task.save().await
    }

    /// Whether a timer is armed and has not fired yet
    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock_slot(&self.slot).pending.is_some()
    }
}

/// Detach the timer for `generation` if it is still the pending one
fn disarm(slot: &Mutex<TimerSlot>, generation: u64) -> bool {
    let mut slot = lock_slot(slot);
    match slot.pending.as_ref() {
        Some(pending) if pending.generation == generation => {
            // Dropping the handle detaches the task; it keeps running
            slot.pending = None;
            true
        }
        _ => false,
    }
}

fn lock_slot(slot: &Mutex<TimerSlot>) -> MutexGuard<'_, TimerSlot> {
    slot.lock().unwrap_or_else(|poisoned| {
        warn!("Save scheduler lock poisoned, recovering");
        poisoned.into_inner()
    })
}
