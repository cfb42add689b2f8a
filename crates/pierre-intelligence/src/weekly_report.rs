// ABOUTME: Weekly summary of activity and health for one user
// ABOUTME: Adds rule-based recommendations for steps, exercise sessions, and sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::master_table::UserRecord;
use pierre_core::constants::recommendations::{
    LOW_EXERCISE_SESSIONS, LOW_NIGHTLY_SLEEP_HOURS, LOW_WEEKLY_STEPS,
};
use pierre_core::constants::time::DAYS_PER_WEEK;
use pierre_core::models::FitnessLevel;
use serde::Serialize;

/// Weekly activity totals and daily averages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportActivity {
    /// Weekly steps
    pub total_steps: u64,
    /// Steps per day
    pub steps_per_day: f64,
    /// Weekly calories burned
    pub total_calories_burned: f64,
    /// Calories per day
    pub calories_per_day: f64,
    /// Exercise sessions
    pub exercise_sessions: u32,
    /// Active minutes
    pub total_active_minutes: u32,
}

/// Health indicators for the week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportHealth {
    /// Composite health score
    pub health_score: u8,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: u32,
    /// Weekly sleep divided by seven
    pub avg_sleep_hours_per_night: f64,
}

/// What a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Weekly steps below target
    IncreaseSteps,
    /// Too few exercise sessions
    AddExerciseSessions,
    /// Nightly sleep below target
    MoreSleep,
}

/// One recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Recommendation kind
    pub kind: RecommendationKind,
    /// Human-readable advice including the current value
    pub message: String,
}

/// Weekly fitness report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    /// Target user
    pub user_id: String,
    /// `"{first_name} {last_name}"`
    pub name: String,
    /// Activity section
    pub activity: ReportActivity,
    /// Health section
    pub health: ReportHealth,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Workout types
    pub workout_types: String,
    /// Recommendations, possibly empty
    pub recommendations: Vec<Recommendation>,
}

impl WeeklyReport {
    /// Build the report for one row
    #[must_use]
    pub fn for_record(record: &UserRecord) -> Self {
        let nightly_sleep = record.sleep_hours_total / DAYS_PER_WEEK;

        let mut recommendations = Vec::new();
        if record.total_steps < LOW_WEEKLY_STEPS {
            recommendations.push(Recommendation {
                kind: RecommendationKind::IncreaseSteps,
                message: format!(
                    "Try to increase daily steps (current: {:.0}/day)",
                    record.metrics.steps_per_day
                ),
            });
        }
        if record.exercise_sessions < LOW_EXERCISE_SESSIONS {
            recommendations.push(Recommendation {
                kind: RecommendationKind::AddExerciseSessions,
                message: format!(
                    "Add more exercise sessions (current: {}/week)",
                    record.exercise_sessions
                ),
            });
        }
        if nightly_sleep < LOW_NIGHTLY_SLEEP_HOURS {
            recommendations.push(Recommendation {
                kind: RecommendationKind::MoreSleep,
                message: format!(
                    "Focus on getting more sleep (current: {nightly_sleep:.1}h/night)"
                ),
            });
        }

        Self {
            user_id: record.user_id.clone(),
            name: record.full_name(),
            activity: ReportActivity {
                total_steps: record.total_steps,
                steps_per_day: record.metrics.steps_per_day,
                total_calories_burned: record.total_calories_burned,
                calories_per_day: record.metrics.calories_per_day,
                exercise_sessions: record.exercise_sessions,
                total_active_minutes: record.total_active_minutes,
            },
            health: ReportHealth {
                health_score: record.metrics.health_score,
                resting_heart_rate: record.resting_heart_rate,
                avg_sleep_hours_per_night: nightly_sleep,
            },
            fitness_level: record.fitness_level,
            workout_types: record.workout_types.clone(),
            recommendations,
        }
    }
}
