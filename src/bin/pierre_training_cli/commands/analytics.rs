// ABOUTME: Local analytics commands for pierre-training-cli
// ABOUTME: One-rep-max estimates computed without contacting the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pierre_training_sync::analytics::OneRepMaxFormula;

/// Print the one-rep-max estimate for `weight` x `reps`
pub fn one_rep_max(weight: f64, reps: u32, formula: OneRepMaxFormula) -> Result<()> {
    let estimate = formula.estimate(weight, reps)?;
    println!("{weight} kg x {reps} reps");
    println!("Estimated 1RM ({formula}): {estimate:.1} kg");
    Ok(())
}
