// ABOUTME: Validation rules for user-entered set values (weight, reps, RPE)
// ABOUTME: Rejects input the training backend would refuse before any save is dispatched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Lowest accepted rate of perceived exertion
pub const RPE_MIN: u8 = 1;

/// Highest accepted rate of perceived exertion
pub const RPE_MAX: u8 = 10;

/// The user-editable part of a set
///
/// Order indices are owned by the list a set lives in, so they are not part
/// of the input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetInput {
    /// Weight lifted, in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Rest after the set, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    /// Time under tension for timed sets, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rate of perceived exertion (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
}

impl SetInput {
    /// Build an input with only weight and reps
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            rest_time: None,
            duration: None,
            rpe: None,
        }
    }

    /// Set the RPE
    #[must_use]
    pub const fn with_rpe(mut self, rpe: u8) -> Self {
        self.rpe = Some(rpe);
        self
    }

    /// Set the rest time in seconds
    #[must_use]
    pub const fn with_rest_time(mut self, seconds: u32) -> Self {
        self.rest_time = Some(seconds);
        self
    }

    /// Check the input against the backend's value rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when weight or reps are not positive and
    /// `ValueOutOfRange` when the RPE is outside 1-10.
    pub fn validate(&self) -> AppResult<()> {
        validate_weight(self.weight)?;
        validate_reps(self.reps)?;
        if let Some(rpe) = self.rpe {
            validate_rpe(rpe)?;
        }
        Ok(())
    }
}

/// Weight must be a finite number greater than zero
///
/// # Errors
///
/// Returns `InvalidInput` for zero, negative, NaN or infinite weights.
pub fn validate_weight(weight: f64) -> AppResult<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input("Weight must be greater than 0"))
    }
}

/// Reps must be greater than zero
///
/// # Errors
///
/// Returns `InvalidInput` for zero reps.
pub fn validate_reps(reps: u32) -> AppResult<()> {
    if reps == 0 {
        return Err(AppError::invalid_input("Reps must be greater than 0"));
    }
    Ok(())
}

/// RPE must be on the 1-10 scale
///
/// # Errors
///
/// Returns `ValueOutOfRange` outside 1-10.
pub fn validate_rpe(rpe: u8) -> AppResult<()> {
    if (RPE_MIN..=RPE_MAX).contains(&rpe) {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "RPE must be between {RPE_MIN} and {RPE_MAX}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_valid_input_passes() {
        assert!(SetInput::new(60.0, 8).with_rpe(8).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        for weight in [0.0, -2.5, f64::NAN, f64::INFINITY] {
            let err = SetInput::new(weight, 5).validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_zero_reps() {
        let err = SetInput::new(50.0, 0).validate().unwrap_err();
        assert_eq!(err.message, "Reps must be greater than 0");
    }

    #[test]
    fn test_rpe_bounds() {
        assert!(SetInput::new(50.0, 5).with_rpe(1).validate().is_ok());
        assert!(SetInput::new(50.0, 5).with_rpe(10).validate().is_ok());
        let err = SetInput::new(50.0, 5).with_rpe(11).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(SetInput::new(50.0, 5).with_rpe(0).validate().is_err());
    }
}
