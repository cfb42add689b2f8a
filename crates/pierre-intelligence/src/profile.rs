// ABOUTME: Nested per-user profile view over one master table row
// ABOUTME: Basic info, health metrics, activity summary, and insurance info groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::master_table::{MasterTable, UserRecord};
use pierre_core::errors::AppResult;
use pierre_core::models::{FitnessLevel, Gender};
use serde::Serialize;

/// Identity and background
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    /// `"{first_name} {last_name}"`
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// City of residence
    pub city: String,
    /// Occupation
    pub occupation: String,
}

/// Health indicators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthMetrics {
    /// Body mass index
    pub bmi: f64,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Composite health score
    pub health_score: u8,
    /// Resting heart rate (bpm)
    pub resting_hr: u32,
    /// `"{systolic}/{diastolic}"`
    pub blood_pressure: String,
}

/// Weekly activity totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    /// Weekly steps
    pub weekly_steps: u64,
    /// Steps per day
    pub daily_avg_steps: f64,
    /// Weekly calories burned
    pub weekly_calories: f64,
    /// Exercise sessions
    pub exercise_sessions: u32,
    /// Workout types
    pub workout_types: String,
}

/// Insurance provider of the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsuranceInfo {
    /// Provider name
    pub provider: Option<String>,
    /// Provider id, when the name resolves
    pub provider_id: Option<String>,
}

/// Read-only nested view over one user's row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    /// Identity and background
    pub basic_info: BasicInfo,
    /// Health indicators
    pub health_metrics: HealthMetrics,
    /// Weekly activity totals
    pub activity_summary: ActivitySummary,
    /// Insurance provider
    pub insurance_info: InsuranceInfo,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            basic_info: BasicInfo {
                name: record.full_name(),
                age: record.age,
                gender: record.gender,
                city: record.city.clone(),
                occupation: record.occupation.clone(),
            },
            health_metrics: HealthMetrics {
                bmi: record.bmi,
                fitness_level: record.fitness_level,
                health_score: record.metrics.health_score,
                resting_hr: record.resting_heart_rate,
                blood_pressure: format!(
                    "{}/{}",
                    record.blood_pressure_systolic, record.blood_pressure_diastolic
                ),
            },
            activity_summary: ActivitySummary {
                weekly_steps: record.total_steps,
                daily_avg_steps: record.metrics.steps_per_day,
                weekly_calories: record.total_calories_burned,
                exercise_sessions: record.exercise_sessions,
                workout_types: record.workout_types.clone(),
            },
            insurance_info: InsuranceInfo {
                provider: record.current_insurance_provider.clone(),
                provider_id: record.provider_id.clone(),
            },
        }
    }
}

/// Assemble the profile of one user
///
/// # Errors
///
/// Returns `ResourceNotFound` when the user has no row in the master table
pub fn get_profile(table: &MasterTable, user_id: &str) -> AppResult<UserProfile> {
    table.require(user_id).map(UserProfile::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master_table::test_support::table;
    use pierre_core::errors::ErrorCode;

    #[test]
    fn test_profile_groups() {
        let table = table(&[("USR001", 34, "Intermediate", 63_000)]);
        let profile = get_profile(&table, "USR001").unwrap();

        assert_eq!(profile.basic_info.name, "Alex RunnerUSR001");
        assert_eq!(profile.basic_info.age, 34);
        assert_eq!(profile.health_metrics.blood_pressure, "120/80");
        assert_eq!(profile.health_metrics.fitness_level, FitnessLevel::Intermediate);
        assert_eq!(profile.activity_summary.weekly_steps, 63_000);
        assert!((profile.activity_summary.daily_avg_steps - 9_000.0).abs() < f64::EPSILON);
        assert_eq!(profile.insurance_info.provider_id.as_deref(), Some("INS001"));
    }

    #[test]
    fn test_profile_serializes_canonical_categoricals() {
        let table = table(&[("USR001", 34, "advanced", 63_000)]);
        let json = serde_json::to_value(get_profile(&table, "USR001").unwrap()).unwrap();

        assert_eq!(json["health_metrics"]["fitness_level"], "Advanced");
        assert_eq!(json["basic_info"]["gender"], "Female");
    }

    #[test]
    fn test_unknown_user() {
        let table = table(&[("USR001", 34, "Intermediate", 63_000)]);
        let err = get_profile(&table, "USR404").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(err.message, "User USR404 not found");
    }
}
