// ABOUTME: Per-user source records for demographics, physical attributes, and weekly activity
// ABOUTME: FitnessLevel and Gender categoricals with strict encoding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the demographics source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicRecord {
    /// User identifier shared across all sources
    pub user_id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years
    pub age: u32,
    /// Gender as written in the source (validated when the master table is built)
    pub gender: String,
    /// City of residence
    pub city: String,
    /// Occupation
    pub occupation: String,
}

/// One row of the physical attributes source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalRecord {
    /// User identifier shared across all sources
    pub user_id: String,
    /// Body mass index
    pub bmi: f64,
    /// Fitness level as written in the source (validated when the master table is built)
    pub fitness_level: String,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: u32,
    /// Average heart rate (bpm)
    pub avg_heart_rate: u32,
    /// Maximum heart rate (bpm)
    pub max_heart_rate: u32,
    /// Systolic blood pressure (mmHg)
    pub blood_pressure_systolic: u32,
    /// Diastolic blood pressure (mmHg)
    pub blood_pressure_diastolic: u32,
}

/// One row of the weekly activity source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// User identifier shared across all sources
    pub user_id: String,
    /// Steps over the week
    pub total_steps: u64,
    /// Calories burned over the week
    pub total_calories_burned: f64,
    /// Active minutes over the week
    pub total_active_minutes: u32,
    /// Number of exercise sessions in the week
    pub exercise_sessions: u32,
    /// Usual exercise frequency (sessions per week)
    pub exercise_frequency_per_week: f64,
    /// Free-text list of workout types
    #[serde(default)]
    pub workout_types: String,
    /// Sleep over the week (hours)
    pub sleep_hours_total: f64,
    /// Average nightly sleep (hours)
    pub sleep_hours_avg: f64,
    /// Medical conditions; `"None"` or an empty cell means no conditions
    #[serde(default)]
    pub medical_conditions: Option<String>,
    /// Insurance provider name, resolved against the providers table
    #[serde(default)]
    pub current_insurance_provider: Option<String>,
}

impl ActivityRecord {
    /// Whether the user reports any medical condition
    #[must_use]
    pub fn has_medical_conditions(&self) -> bool {
        self.medical_conditions
            .as_deref()
            .map(str::trim)
            .is_some_and(|condition| !condition.is_empty() && condition != "None")
    }
}

/// Self-reported fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessLevel {
    /// Beginner fitness level
    Beginner,
    /// Intermediate fitness level
    Intermediate,
    /// Advanced fitness level
    Advanced,
}

impl FitnessLevel {
    /// Ordinal encoding used by the analytics tables
    #[must_use]
    pub const fn encoded(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Canonical spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::validation(format!(
                "unknown fitness level '{s}' (expected Beginner, Intermediate or Advanced)"
            ))),
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as encoded by the analytics tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Binary encoding used by the analytics tables
    #[must_use]
    pub const fn encoded(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }

    /// Canonical spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(AppError::validation(format!(
                "unknown gender '{s}' (expected Male or Female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
