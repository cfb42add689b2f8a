// ABOUTME: Composite health score (0-100) from BMI, steps, sleep, exercise frequency, and conditions
// ABOUTME: Pure per-user function with a term-by-term breakdown for reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Score
//!
//! The score starts at a base of 50 and adds one term per factor:
//!
//! | Factor | Condition | Points |
//! |---|---|---|
//! | BMI | 18.5 ≤ bmi ≤ 25 | +15 |
//! | | 25 < bmi ≤ 30 | +5 |
//! | | otherwise | −10 |
//! | Weekly steps | > 70,000 | +15 |
//! | | > 49,000 | +10 |
//! | | otherwise | +5 |
//! | Nightly sleep | 7 ≤ h ≤ 9 | +10 |
//! | | otherwise | +5 |
//! | Exercise frequency | ≥ 5 / week | +10 |
//! | | ≥ 3 / week | +5 |
//! | Medical conditions | any reported | −5 |
//!
//! The total is clamped to `[0, 100]`. A NaN BMI or sleep value falls into the
//! "otherwise" band of its factor.

use pierre_core::constants::health_score::{
    BASE_SCORE, BMI_OPTIMAL_MAX, BMI_OPTIMAL_MIN, BMI_OPTIMAL_POINTS, BMI_OTHER_POINTS,
    BMI_OVERWEIGHT_MAX, BMI_OVERWEIGHT_POINTS, FREQUENCY_HIGH_POINTS, FREQUENCY_HIGH_THRESHOLD,
    FREQUENCY_MODERATE_POINTS, FREQUENCY_MODERATE_THRESHOLD, MAX_SCORE, MEDICAL_CONDITION_PENALTY,
    MIN_SCORE, SLEEP_OPTIMAL_MAX, SLEEP_OPTIMAL_MIN, SLEEP_OPTIMAL_POINTS, SLEEP_OTHER_POINTS,
    STEPS_HIGH_POINTS, STEPS_HIGH_THRESHOLD, STEPS_LOW_POINTS, STEPS_MODERATE_POINTS,
    STEPS_MODERATE_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Inputs to the health score, extracted from one user's joined row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthScoreInputs {
    /// Body mass index
    pub bmi: f64,
    /// Weekly steps
    pub total_steps: u64,
    /// Average nightly sleep (hours)
    pub sleep_hours_avg: f64,
    /// Exercise sessions per week
    pub exercise_frequency_per_week: f64,
    /// Whether any medical condition is reported
    pub has_medical_conditions: bool,
}

/// Points contributed by each factor before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScoreBreakdown {
    /// Base score
    pub base: i32,
    /// BMI term
    pub bmi: i32,
    /// Steps term
    pub steps: i32,
    /// Sleep term
    pub sleep: i32,
    /// Exercise frequency term
    pub exercise_frequency: i32,
    /// Medical conditions term
    pub medical_conditions: i32,
}

impl HealthScoreBreakdown {
    /// Compute every term for the given inputs
    #[must_use]
    pub fn from_inputs(inputs: &HealthScoreInputs) -> Self {
        Self {
            base: BASE_SCORE,
            bmi: bmi_points(inputs.bmi),
            steps: steps_points(inputs.total_steps),
            sleep: sleep_points(inputs.sleep_hours_avg),
            exercise_frequency: frequency_points(inputs.exercise_frequency_per_week),
            medical_conditions: if inputs.has_medical_conditions {
                MEDICAL_CONDITION_PENALTY
            } else {
                0
            },
        }
    }

    /// Sum of all terms, unclamped
    #[must_use]
    pub const fn raw_total(&self) -> i32 {
        self.base
            + self.bmi
            + self.steps
            + self.sleep
            + self.exercise_frequency
            + self.medical_conditions
    }

    /// Final score clamped to `[0, 100]`
    #[must_use]
    pub fn score(&self) -> u8 {
        // Safe: clamped to 0..=100 before the cast
        self.raw_total().clamp(MIN_SCORE, MAX_SCORE) as u8
    }
}

/// Compute the clamped health score for one user
#[must_use]
pub fn calculate_health_score(inputs: &HealthScoreInputs) -> u8 {
    HealthScoreBreakdown::from_inputs(inputs).score()
}

fn bmi_points(bmi: f64) -> i32 {
    if (BMI_OPTIMAL_MIN..=BMI_OPTIMAL_MAX).contains(&bmi) {
        BMI_OPTIMAL_POINTS
    } else if bmi > BMI_OPTIMAL_MAX && bmi <= BMI_OVERWEIGHT_MAX {
        BMI_OVERWEIGHT_POINTS
    } else {
        BMI_OTHER_POINTS
    }
}

const fn steps_points(total_steps: u64) -> i32 {
    if total_steps > STEPS_HIGH_THRESHOLD {
        STEPS_HIGH_POINTS
    } else if total_steps > STEPS_MODERATE_THRESHOLD {
        STEPS_MODERATE_POINTS
    } else {
        STEPS_LOW_POINTS
    }
}

fn sleep_points(sleep_hours_avg: f64) -> i32 {
    if (SLEEP_OPTIMAL_MIN..=SLEEP_OPTIMAL_MAX).contains(&sleep_hours_avg) {
        SLEEP_OPTIMAL_POINTS
    } else {
        SLEEP_OTHER_POINTS
    }
}

fn frequency_points(frequency: f64) -> i32 {
    if frequency >= FREQUENCY_HIGH_THRESHOLD {
        FREQUENCY_HIGH_POINTS
    } else if frequency >= FREQUENCY_MODERATE_THRESHOLD {
        FREQUENCY_MODERATE_POINTS
    } else {
        0
    }
}
