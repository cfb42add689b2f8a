// ABOUTME: Master table builder joining demographics, physical, and activity sources per user
// ABOUTME: Attaches provider ids, encodes categoricals, and derives daily metrics and health scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Master Table
//!
//! One [`UserRecord`] per user that appears in all three per-user sources.
//! Users missing from any source are dropped silently, so a lookup miss cannot
//! tell "never existed" apart from "lacked one data source". The builder only
//! logs how many rows the join dropped.
//!
//! Rows keep the order of the demographics source.

use crate::health_score::{calculate_health_score, HealthScoreInputs};
use crate::insurance::InsuranceCatalog;
use pierre_core::constants::{sources, time::DAYS_PER_WEEK};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    ActivityRecord, DemographicRecord, FitnessLevel, Gender, InsuranceProvider, InsuranceService,
    PhysicalRecord,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// The five loaded sources, as handed to the builder
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    /// Demographics rows
    pub demographics: Vec<DemographicRecord>,
    /// Physical attribute rows
    pub physical: Vec<PhysicalRecord>,
    /// Weekly activity rows
    pub activity: Vec<ActivityRecord>,
    /// Insurance provider rows
    pub insurance_providers: Vec<InsuranceProvider>,
    /// Insurance service rows
    pub insurance_services: Vec<InsuranceService>,
}

/// Metrics derived from one user's weekly totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// `total_steps / 7`
    pub steps_per_day: f64,
    /// `total_calories_burned / 7`
    pub calories_per_day: f64,
    /// Calories per active minute; `None` when no active minutes were recorded
    pub activity_efficiency: Option<f64>,
    /// Composite health score in `[0, 100]`
    pub health_score: u8,
}

impl DerivedMetrics {
    /// Derive metrics from the activity and physical rows of one user
    #[must_use]
    pub fn derive(physical: &PhysicalRecord, activity: &ActivityRecord) -> Self {
        let activity_efficiency = (activity.total_active_minutes > 0)
            .then(|| activity.total_calories_burned / f64::from(activity.total_active_minutes))
            .filter(|value| value.is_finite());

        Self {
            steps_per_day: activity.total_steps as f64 / DAYS_PER_WEEK,
            calories_per_day: activity.total_calories_burned / DAYS_PER_WEEK,
            activity_efficiency,
            health_score: calculate_health_score(&HealthScoreInputs {
                bmi: physical.bmi,
                total_steps: activity.total_steps,
                sleep_hours_avg: activity.sleep_hours_avg,
                exercise_frequency_per_week: activity.exercise_frequency_per_week,
                has_medical_conditions: activity.has_medical_conditions(),
            }),
        }
    }
}

/// One joined row of the master table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    /// User identifier
    pub user_id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years
    pub age: u32,
    /// Validated gender
    pub gender: Gender,
    /// City of residence
    pub city: String,
    /// Occupation
    pub occupation: String,
    /// Body mass index
    pub bmi: f64,
    /// Validated fitness level
    pub fitness_level: FitnessLevel,
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
    /// Weekly steps
    pub total_steps: u64,
    /// Weekly calories burned
    pub total_calories_burned: f64,
    /// Weekly active minutes
    pub total_active_minutes: u32,
    /// Exercise sessions this week
    pub exercise_sessions: u32,
    /// Exercise sessions per week
    pub exercise_frequency_per_week: f64,
    /// Workout types
    pub workout_types: String,
    /// Weekly sleep (hours)
    pub sleep_hours_total: f64,
    /// Average nightly sleep (hours)
    pub sleep_hours_avg: f64,
    /// Medical conditions as recorded
    pub medical_conditions: Option<String>,
    /// Insurance provider name as recorded
    pub current_insurance_provider: Option<String>,
    /// Provider id resolved from the providers table
    pub provider_id: Option<String>,
    /// `Beginner=0, Intermediate=1, Advanced=2`
    pub fitness_level_encoded: u8,
    /// `Male=0, Female=1`
    pub gender_encoded: u8,
    /// Derived per-user metrics
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl UserRecord {
    /// Join one user's rows, validating categorical values
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` when the gender or fitness level is not one
    /// of the known values
    pub fn join(
        demographic: &DemographicRecord,
        physical: &PhysicalRecord,
        activity: &ActivityRecord,
        catalog: &InsuranceCatalog,
    ) -> AppResult<Self> {
        let gender: Gender = demographic.gender.parse().map_err(|e: AppError| {
            AppError::validation(format!("user {}: {}", demographic.user_id, e.message))
        })?;
        let fitness_level: FitnessLevel = physical.fitness_level.parse().map_err(|e: AppError| {
            AppError::validation(format!("user {}: {}", demographic.user_id, e.message))
        })?;

        let provider_id = activity
            .current_insurance_provider
            .as_deref()
            .and_then(|name| catalog.provider_id(name))
            .map(str::to_owned);

        Ok(Self {
            user_id: demographic.user_id.clone(),
            first_name: demographic.first_name.clone(),
            last_name: demographic.last_name.clone(),
            age: demographic.age,
            gender,
            city: demographic.city.clone(),
            occupation: demographic.occupation.clone(),
            bmi: physical.bmi,
            fitness_level,
            resting_heart_rate: physical.resting_heart_rate,
            avg_heart_rate: physical.avg_heart_rate,
            max_heart_rate: physical.max_heart_rate,
            blood_pressure_systolic: physical.blood_pressure_systolic,
            blood_pressure_diastolic: physical.blood_pressure_diastolic,
            total_steps: activity.total_steps,
            total_calories_burned: activity.total_calories_burned,
            total_active_minutes: activity.total_active_minutes,
            exercise_sessions: activity.exercise_sessions,
            exercise_frequency_per_week: activity.exercise_frequency_per_week,
            workout_types: activity.workout_types.clone(),
            sleep_hours_total: activity.sleep_hours_total,
            sleep_hours_avg: activity.sleep_hours_avg,
            medical_conditions: activity.medical_conditions.clone(),
            current_insurance_provider: activity.current_insurance_provider.clone(),
            provider_id,
            fitness_level_encoded: fitness_level.encoded(),
            gender_encoded: gender.encoded(),
            metrics: DerivedMetrics::derive(physical, activity),
        })
    }

    /// `"{first_name} {last_name}"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The joined, immutable per-user table
#[derive(Debug, Clone, Default)]
pub struct MasterTable {
    records: Vec<UserRecord>,
    index: HashMap<String, usize>,
    dropped_rows: usize,
}

impl MasterTable {
    /// Join the per-user sources and derive metrics for every joined row
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` when a user id repeats within one source, and
    /// `ValidationFailed` when a categorical value cannot be encoded
    pub fn build(tables: &SourceTables, catalog: &InsuranceCatalog) -> AppResult<Self> {
        let physical = index_unique(&tables.physical, sources::PHYSICAL, |r| &r.user_id)?;
        let activity = index_unique(&tables.activity, sources::ACTIVITY, |r| &r.user_id)?;
        index_unique(&tables.demographics, sources::DEMOGRAPHICS, |r| &r.user_id)?;

        let records: Vec<UserRecord> = tables
            .demographics
            .par_iter()
            .filter_map(|demographic| {
                let user_id = demographic.user_id.as_str();
                let physical = physical.get(user_id)?;
                let activity = activity.get(user_id)?;
                Some(UserRecord::join(demographic, physical, activity, catalog))
            })
            .collect::<AppResult<_>>()?;

        let dropped_rows = tables.demographics.len() - records.len();
        if dropped_rows > 0 {
            debug!(
                dropped_rows,
                "Demographic rows without matching physical and activity rows were dropped"
            );
        }

        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.user_id.clone(), position))
            .collect();

        info!(
            users = records.len(),
            dropped_rows,
            providers = catalog.provider_count(),
            "Master table prepared"
        );

        Ok(Self {
            records,
            index,
            dropped_rows,
        })
    }

    /// Number of joined users
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no user survived the join
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Demographic rows that had no match in the physical or activity sources
    #[must_use]
    pub const fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// All rows in demographics order
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Look up a user
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&UserRecord> {
        self.index.get(user_id).map(|&position| &self.records[position])
    }

    /// Look up a user, failing with `ResourceNotFound` on a miss
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no row
    pub fn require(&self, user_id: &str) -> AppResult<&UserRecord> {
        self.get(user_id).ok_or_else(|| {
            debug!(user_id, "User lookup missed the master table");
            AppError::not_found(format!("User {user_id}"))
        })
    }

    /// Every user sharing the given fitness level, in table order
    pub fn with_fitness_level(
        &self,
        fitness_level: FitnessLevel,
    ) -> impl Iterator<Item = &UserRecord> {
        self.records
            .iter()
            .filter(move |record| record.fitness_level == fitness_level)
    }
}

fn index_unique<'a, T>(
    rows: &'a [T],
    source: &str,
    key: impl Fn(&'a T) -> &'a String,
) -> AppResult<HashMap<&'a str, &'a T>> {
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        let user_id = key(row).as_str();
        if index.insert(user_id, row).is_some() {
            return Err(AppError::data_load(
                source,
                format!("duplicate user_id '{user_id}'"),
            ));
        }
    }
    Ok(index)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn demographic(user_id: &str, age: u32, gender: &str) -> DemographicRecord {
        DemographicRecord {
            user_id: user_id.into(),
            first_name: "Alex".into(),
            last_name: format!("Runner{user_id}"),
            age,
            gender: gender.into(),
            city: "Austin".into(),
            occupation: "Engineer".into(),
        }
    }

    pub fn physical(user_id: &str, bmi: f64, fitness_level: &str) -> PhysicalRecord {
        PhysicalRecord {
            user_id: user_id.into(),
            bmi,
            fitness_level: fitness_level.into(),
            resting_heart_rate: 62,
            avg_heart_rate: 120,
            max_heart_rate: 180,
            blood_pressure_systolic: 120,
            blood_pressure_diastolic: 80,
        }
    }

    pub fn activity(user_id: &str, total_steps: u64) -> ActivityRecord {
        ActivityRecord {
            user_id: user_id.into(),
            total_steps,
            total_calories_burned: 2_800.0,
            total_active_minutes: 280,
            exercise_sessions: 4,
            exercise_frequency_per_week: 4.0,
            workout_types: "Running, Yoga".into(),
            sleep_hours_total: 52.5,
            sleep_hours_avg: 7.5,
            medical_conditions: Some("None".into()),
            current_insurance_provider: Some("HealthFirst".into()),
        }
    }

    pub fn catalog() -> InsuranceCatalog {
        InsuranceCatalog::new(
            vec![InsuranceProvider {
                provider_id: "INS001".into(),
                provider_name: "HealthFirst".into(),
            }],
            Vec::new(),
        )
    }

    /// Build a table where each tuple is (user_id, age, fitness_level, total_steps)
    pub fn table(users: &[(&str, u32, &str, u64)]) -> MasterTable {
        let tables = SourceTables {
            demographics: users
                .iter()
                .map(|(id, age, _, _)| demographic(id, *age, "Female"))
                .collect(),
            physical: users
                .iter()
                .map(|(id, _, level, _)| physical(id, 22.0, level))
                .collect(),
            activity: users
                .iter()
                .map(|(id, _, _, steps)| activity(id, *steps))
                .collect(),
            ..SourceTables::default()
        };
        MasterTable::build(&tables, &catalog()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use pierre_core::errors::ErrorCode;

    #[test]
    fn test_inner_join_drops_incomplete_users() {
        let tables = SourceTables {
            demographics: vec![
                demographic("USR001", 30, "Male"),
                demographic("USR002", 31, "Female"),
                demographic("USR003", 32, "Female"),
            ],
            physical: vec![
                physical("USR001", 22.0, "Beginner"),
                physical("USR003", 27.0, "Advanced"),
            ],
            activity: vec![activity("USR003", 60_000), activity("USR001", 80_000)],
            ..SourceTables::default()
        };

        let table = MasterTable::build(&tables, &catalog()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.dropped_rows(), 1);
        assert!(table.get("USR002").is_none());
        let ids: Vec<_> = table.records().iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, ["USR001", "USR003"]);
    }

    #[test]
    fn test_encodings_and_provider_attachment() {
        let mut tables = SourceTables {
            demographics: vec![demographic("USR001", 30, "Male"), demographic("USR002", 40, "Female")],
            physical: vec![
                physical("USR001", 22.0, "Advanced"),
                physical("USR002", 22.0, "Intermediate"),
            ],
            activity: vec![activity("USR001", 80_000), activity("USR002", 80_000)],
            ..SourceTables::default()
        };
        tables.activity[1].current_insurance_provider = Some("Unknown Mutual".into());

        let table = MasterTable::build(&tables, &catalog()).unwrap();
        let first = table.get("USR001").unwrap();
        let second = table.get("USR002").unwrap();

        assert_eq!(first.gender_encoded, 0);
        assert_eq!(first.fitness_level_encoded, 2);
        assert_eq!(first.provider_id.as_deref(), Some("INS001"));
        assert_eq!(second.gender_encoded, 1);
        assert_eq!(second.fitness_level_encoded, 1);
        assert_eq!(second.provider_id, None);
    }

    #[test]
    fn test_derived_metrics() {
        let table = table(&[("USR001", 30, "Beginner", 70_000)]);
        let record = table.get("USR001").unwrap();

        assert!((record.metrics.steps_per_day - 10_000.0).abs() < f64::EPSILON);
        assert!((record.metrics.calories_per_day - 400.0).abs() < f64::EPSILON);
        assert_eq!(record.metrics.activity_efficiency, Some(10.0));
        // 50 + 15 (bmi) + 10 (steps) + 10 (sleep) + 5 (frequency)
        assert_eq!(record.metrics.health_score, 90);
    }

    #[test]
    fn test_zero_active_minutes_has_no_efficiency() {
        let mut act = activity("USR001", 10_000);
        act.total_active_minutes = 0;
        let metrics = DerivedMetrics::derive(&physical("USR001", 22.0, "Beginner"), &act);
        assert_eq!(metrics.activity_efficiency, None);
    }

    #[test]
    fn test_unknown_fitness_level_fails_fast() {
        let tables = SourceTables {
            demographics: vec![demographic("USR001", 30, "Male")],
            physical: vec![physical("USR001", 22.0, "Elite")],
            activity: vec![activity("USR001", 10_000)],
            ..SourceTables::default()
        };

        let err = MasterTable::build(&tables, &catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("USR001"));
        assert!(err.message.contains("Elite"));
    }

    #[test]
    fn test_unknown_gender_fails_fast() {
        let tables = SourceTables {
            demographics: vec![demographic("USR001", 30, "Unspecified")],
            physical: vec![physical("USR001", 22.0, "Beginner")],
            activity: vec![activity("USR001", 10_000)],
            ..SourceTables::default()
        };

        let err = MasterTable::build(&tables, &catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_duplicate_user_is_a_load_error() {
        let tables = SourceTables {
            demographics: vec![demographic("USR001", 30, "Male")],
            physical: vec![
                physical("USR001", 22.0, "Beginner"),
                physical("USR001", 23.0, "Beginner"),
            ],
            activity: vec![activity("USR001", 10_000)],
            ..SourceTables::default()
        };

        let err = MasterTable::build(&tables, &catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DataLoad);
        assert!(err.message.starts_with("physical"));
    }

    #[test]
    fn test_require_reports_not_found() {
        let table = table(&[("USR001", 30, "Beginner", 70_000)]);
        let err = table.require("USR999").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
}
