// ABOUTME: Decides whether a save response may replace the local training state
// ABOUTME: Compares local revision and structural fingerprints against the submitted snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Save reconciliation
//!
//! A save response reflects the training as it was submitted. If the user
//! kept editing while the request was in flight, the response is stale and
//! must not replace local state.
//!
//! The primary check is the local revision counter captured at dispatch. If
//! the revision moved, the response is still accepted when the local state is
//! structurally identical to what was submitted (e.g. an edit that was undone),
//! where "structure" covers the session header (start time, duration, notes,
//! status), every implementation and the full contents of its sets.

use chrono::{DateTime, Utc};
use pierre_training_core::models::{Implementation, SetEntry, Training, TrainingStatus};

/// Training as submitted by a save, plus the local revision at that moment
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSnapshot {
    /// Submitted training
    pub training: Training,
    /// Local revision when the save was dispatched
    pub revision: u64,
}

/// Order-independent structural identity of a training's editable contents
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionFingerprint {
    header: HeaderPrint,
    entries: Vec<ImplementationPrint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HeaderPrint {
    date_time: DateTime<Utc>,
    duration: Option<u32>,
    notes: Option<String>,
    status: TrainingStatus,
}

impl From<&Training> for HeaderPrint {
    fn from(training: &Training) -> Self {
        Self {
            date_time: training.date_time,
            duration: training.duration,
            notes: training.notes.clone(),
            status: training.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct ImplementationPrint {
    order_index: u32,
    exercise_id: i64,
    sets: Vec<SetPrint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct SetPrint {
    order_index: u32,
    // f64 compared by bit pattern; weights are never NaN after validation
    weight_bits: u64,
    reps: u32,
    rest_time: Option<u32>,
    duration: Option<u32>,
    rpe: Option<u8>,
}

impl From<&SetEntry> for SetPrint {
    fn from(set: &SetEntry) -> Self {
        Self {
            order_index: set.order_index,
            weight_bits: set.weight.to_bits(),
            reps: set.reps,
            rest_time: set.rest_time,
            duration: set.duration,
            rpe: set.rpe,
        }
    }
}

impl From<&Implementation> for ImplementationPrint {
    fn from(implementation: &Implementation) -> Self {
        let mut sets: Vec<SetPrint> = implementation.sets.iter().map(SetPrint::from).collect();
        sets.sort();
        Self {
            order_index: implementation.order_index,
            exercise_id: implementation.exercise_id,
            sets,
        }
    }
}

impl SessionFingerprint {
    /// Fingerprint of `training`, sorted by position
    #[must_use]
    pub fn of(training: &Training) -> Self {
        let mut entries: Vec<ImplementationPrint> = training
            .implementations
            .iter()
            .map(ImplementationPrint::from)
            .collect();
        entries.sort();
        Self {
            header: HeaderPrint::from(training),
            entries,
        }
    }

    /// Whether both trainings agree on start time, duration, notes and status
    #[must_use]
    pub fn same_header(&self, other: &Self) -> bool {
        self.header == other.header
    }

    /// Number of exercise entries covered
    #[must_use]
    pub fn implementation_count(&self) -> usize {
        self.entries.len()
    }
}

/// Why a response was allowed to replace local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptReason {
    /// No local edit happened during the round trip
    Unmodified,
    /// Local edits happened but left the training structurally identical
    StructurallyEqual,
    /// Submitted, local and response are all empty
    AllEmpty,
}

/// Outcome of reconciling a save response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Replace local state with the response
    Accepted(AcceptReason),
    /// Keep local state; the next save will carry it
    KeptLocal,
}

impl Reconciliation {
    /// Whether the response replaces local state
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Decide whether `response` may replace `current`
///
/// `current_revision` is the local revision now; `snapshot` is what the save
/// submitted.
#[must_use]
pub fn reconcile(
    current: &Training,
    current_revision: u64,
    snapshot: &SaveSnapshot,
    response: &Training,
) -> Reconciliation {
    if current_revision == snapshot.revision {
        return Reconciliation::Accepted(AcceptReason::Unmodified);
    }

    let local = SessionFingerprint::of(current);
    let submitted = SessionFingerprint::of(&snapshot.training);
    if !local.same_header(&submitted) {
        return Reconciliation::KeptLocal;
    }

    let submitted_count = submitted.implementation_count();
    if submitted_count == 0
        && current.implementations.is_empty()
        && response.implementations.is_empty()
    {
        return Reconciliation::Accepted(AcceptReason::AllEmpty);
    }

    if submitted_count > 0
        && response.implementations.len() == submitted_count
        && local == submitted
    {
        return Reconciliation::Accepted(AcceptReason::StructurallyEqual);
    }

    Reconciliation::KeptLocal
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pierre_training_core::models::SetInput;

    fn training(exercises: &[i64]) -> Training {
        let mut training = Training::new(1, 1, Utc::now());
        for exercise in exercises {
            training.add_implementation(*exercise);
        }
        training
    }

    fn snapshot(training: &Training, revision: u64) -> SaveSnapshot {
        SaveSnapshot {
            training: training.clone(),
            revision,
        }
    }

    #[test]
    fn test_unchanged_revision_accepts() {
        let submitted = training(&[1, 2]);
        let outcome = reconcile(&submitted, 3, &snapshot(&submitted, 3), &submitted);
        assert_eq!(outcome, Reconciliation::Accepted(AcceptReason::Unmodified));
    }

    #[test]
    fn test_added_implementation_keeps_local() {
        let submitted = training(&[1, 2]);
        let mut current = submitted.clone();
        current.add_implementation(3);
        let outcome = reconcile(&current, 4, &snapshot(&submitted, 3), &submitted);
        assert_eq!(outcome, Reconciliation::KeptLocal);
    }

    #[test]
    fn test_in_place_set_edit_keeps_local() {
        let mut submitted = training(&[1]);
        submitted.add_set(0, &SetInput::new(50.0, 10)).unwrap();
        let mut current = submitted.clone();
        current.update_set(0, 0, &SetInput::new(52.5, 10)).unwrap();

        let outcome = reconcile(&current, 5, &snapshot(&submitted, 4), &submitted);
        assert_eq!(outcome, Reconciliation::KeptLocal);
    }

    #[test]
    fn test_undone_edit_is_structurally_equal() {
        let submitted = training(&[1, 2]);
        let mut current = submitted.clone();
        current.add_implementation(3);
        current.remove_implementation(2).unwrap();

        let outcome = reconcile(&current, 5, &snapshot(&submitted, 3), &submitted);
        assert_eq!(
            outcome,
            Reconciliation::Accepted(AcceptReason::StructurallyEqual)
        );
    }

    #[test]
    fn test_all_empty_accepts() {
        let submitted = training(&[]);
        let outcome = reconcile(&submitted, 9, &snapshot(&submitted, 2), &submitted);
        assert_eq!(outcome, Reconciliation::Accepted(AcceptReason::AllEmpty));
    }

    #[test]
    fn test_response_count_mismatch_keeps_local() {
        let submitted = training(&[1, 2]);
        let response = training(&[1]);
        let outcome = reconcile(&submitted, 4, &snapshot(&submitted, 3), &response);
        assert_eq!(outcome, Reconciliation::KeptLocal);
    }

    #[test]
    fn test_notes_edit_during_save_keeps_local() {
        let submitted = training(&[1, 2]);
        let mut current = submitted.clone();
        current.notes = Some("felt heavy".to_owned());

        let outcome = reconcile(&current, 4, &snapshot(&submitted, 3), &submitted);
        assert_eq!(outcome, Reconciliation::KeptLocal);
    }

    #[test]
    fn test_start_time_or_duration_edit_keeps_local() {
        let submitted = training(&[1]);
        let mut moved = submitted.clone();
        moved.date_time = submitted.date_time - Duration::minutes(30);
        assert_eq!(
            reconcile(&moved, 4, &snapshot(&submitted, 3), &submitted),
            Reconciliation::KeptLocal
        );

        let mut timed = submitted.clone();
        timed.duration = Some(1800);
        assert_eq!(
            reconcile(&timed, 4, &snapshot(&submitted, 3), &submitted),
            Reconciliation::KeptLocal
        );
    }

    #[test]
    fn test_header_edit_keeps_local_for_empty_session() {
        let submitted = training(&[]);
        let mut current = submitted.clone();
        current.notes = Some("rest day".to_owned());

        let outcome = reconcile(&current, 2, &snapshot(&submitted, 1), &submitted);
        assert_eq!(outcome, Reconciliation::KeptLocal);
    }

    #[test]
    fn test_fingerprint_ignores_list_order() {
        let mut a = training(&[1, 2]);
        let mut b = a.clone();
        b.implementations.reverse();
        assert_eq!(SessionFingerprint::of(&a), SessionFingerprint::of(&b));
        a.change_exercise(0, 9).unwrap();
        assert_ne!(SessionFingerprint::of(&a), SessionFingerprint::of(&b));
        assert_eq!(SessionFingerprint::of(&a).implementation_count(), 2);
    }
}
