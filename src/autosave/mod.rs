// ABOUTME: Auto-save for in-progress trainings: edits, debounce scheduling and reconciliation
// ABOUTME: Re-exports the coordinator and its building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session coordinator tying edits, scheduling and the store together
pub mod coordinator;
/// User edits applied to local training state
pub mod edit;
/// Accept/reject decision for save responses
pub mod reconcile;
/// Debounce and flush scheduling
pub mod scheduler;

pub use coordinator::{AutoSaveCoordinator, SaveStatus};
pub use edit::SessionEdit;
pub use reconcile::{reconcile, AcceptReason, Reconciliation, SaveSnapshot, SessionFingerprint};
pub use scheduler::{SaveScheduler, SaveTask};
