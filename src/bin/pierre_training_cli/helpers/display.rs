// ABOUTME: Output formatting helpers for pierre-training-cli
// ABOUTME: Prints trainings, their sets and the auto-save status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_training_sync::{
    analytics::{self, OneRepMaxFormula},
    autosave::SaveStatus,
    models::Training,
};

/// Display a training with one line per set
pub fn display_training(training: &Training) {
    println!("\nTraining {} ({})", training.id, training.status);
    println!("{}", "=".repeat(60));
    println!("   Started: {}", training.date_time.format("%Y-%m-%d %H:%M UTC"));
    if let Some(duration) = training.duration {
        println!("   Duration: {}m {:02}s", duration / 60, duration % 60);
    }
    if let Some(notes) = &training.notes {
        println!("   Notes: {notes}");
    }

    if training.implementations.is_empty() {
        println!("\n   No exercises logged yet");
        return;
    }

    for implementation in &training.implementations {
        println!(
            "\n{}. Exercise {}",
            implementation.order_index, implementation.exercise_id
        );
        if implementation.sets.is_empty() {
            println!("     (no sets)");
        }
        for set in &implementation.sets {
            let rpe = set.rpe.map(|rpe| format!(" @ RPE {rpe}")).unwrap_or_default();
            println!(
                "     {}. {} kg x {}{rpe}",
                set.order_index, set.weight, set.reps
            );
        }
        if let Some(best) =
            analytics::best_one_rep_max(&implementation.sets, OneRepMaxFormula::default())
        {
            println!("     Best est. 1RM: {best:.1} kg");
        }
    }

    println!("{}", "=".repeat(60));
    println!("Total volume: {:.1} kg", training.total_volume());
}

/// Display the outcome of the last save
pub fn display_save_status(status: &SaveStatus) {
    match (&status.last_error, status.last_saved) {
        (Some(error), _) => println!("\nNot saved: {error}"),
        (None, Some(saved)) => println!("\nSaved at {}", saved.format("%H:%M:%S UTC")),
        (None, None) => println!("\nNothing to save"),
    }
}
