// ABOUTME: One-rep-max estimation (Brzycki, Epley, Lombardi) and training volume
// ABOUTME: Pure functions over sets, used for per-session personal record candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{SetEntry, Training};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One-rep-max estimation formula
///
/// - `Brzycki`: 1RM = w / (1.0278 - 0.0278 x r)
/// - `Epley`: 1RM = w x (1 + r / 30)
/// - `Lombardi`: 1RM = w x r^0.10
///
/// All formulas return the lifted weight unchanged for a single rep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Brzycki (1993); most accurate below ten reps
    #[default]
    Brzycki,
    /// Epley (1985)
    Epley,
    /// Lombardi (1989)
    Lombardi,
}

const BRZYCKI_INTERCEPT: f64 = 1.0278;
const BRZYCKI_SLOPE: f64 = 0.0278;
const EPLEY_DIVISOR: f64 = 30.0;
const LOMBARDI_EXPONENT: f64 = 0.10;

impl OneRepMaxFormula {
    /// Estimate the one-rep max from a submaximal set
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for zero reps or a non-positive weight, and
    /// `ValueOutOfRange` when Brzycki is asked for a rep count where its
    /// denominator is no longer positive (37 reps and above).
    pub fn estimate(self, weight: f64, reps: u32) -> AppResult<f64> {
        crate::models::values::validate_weight(weight)?;
        crate::models::values::validate_reps(reps)?;
        if reps == 1 {
            return Ok(weight);
        }

        let reps = f64::from(reps);
        match self {
            Self::Brzycki => {
                let denominator = BRZYCKI_SLOPE.mul_add(-reps, BRZYCKI_INTERCEPT);
                if denominator <= 0.0 {
                    return Err(AppError::out_of_range(
                        "Brzycki formula is undefined for this many reps",
                    ));
                }
                Ok(weight / denominator)
            }
            Self::Epley => Ok(weight * (1.0 + reps / EPLEY_DIVISOR)),
            Self::Lombardi => Ok(weight * reps.powf(LOMBARDI_EXPONENT)),
        }
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            "lombardi" => Ok(Self::Lombardi),
            other => Err(AppError::invalid_input(format!("Unknown formula: {other}"))),
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brzycki => write!(f, "brzycki"),
            Self::Epley => write!(f, "epley"),
            Self::Lombardi => write!(f, "lombardi"),
        }
    }
}

/// Total volume (sum of weight x reps)
#[must_use]
pub fn volume(sets: &[SetEntry]) -> f64 {
    sets.iter().map(SetEntry::volume).sum()
}

/// Highest one-rep-max estimate across `sets`
///
/// Sets the formula cannot handle are skipped. Returns `None` when no set
/// yields an estimate.
#[must_use]
pub fn best_one_rep_max(sets: &[SetEntry], formula: OneRepMaxFormula) -> Option<f64> {
    sets.iter()
        .filter_map(|set| formula.estimate(set.weight, set.reps).ok())
        .fold(None, |best, estimate| match best {
            Some(current) if current >= estimate => Some(current),
            _ => Some(estimate),
        })
}

impl Training {
    /// Volume across every implementation of this training
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.implementations
            .iter()
            .map(|implementation| volume(&implementation.sets))
            .sum()
    }
}
