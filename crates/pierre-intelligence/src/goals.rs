// ABOUTME: Weekly goal defaults scaled by fitness level and goal achievement percentages
// ABOUTME: Classifies each goal as achieved, on track, or behind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::master_table::UserRecord;
use pierre_core::constants::goals::{
    ACHIEVED_PERCENT, BASE_EXERCISE_SESSIONS, BASE_WEEKLY_CALORIES, BASE_WEEKLY_STEPS,
    ON_TRACK_PERCENT, WEEKLY_SLEEP_HOURS,
};
use pierre_core::models::FitnessLevel;
use serde::{Deserialize, Serialize};

/// Weekly targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyGoals {
    /// Steps per week
    pub weekly_steps: u64,
    /// Calories burned per week
    pub weekly_calories: u64,
    /// Exercise sessions per week
    pub exercise_sessions: u32,
    /// Sleep per week (hours)
    pub sleep_hours: f64,
}

impl WeeklyGoals {
    /// Default goals scaled by the fitness-level multiplier
    #[must_use]
    pub fn for_fitness_level(fitness_level: FitnessLevel) -> Self {
        let multiplier = goal_multiplier(fitness_level);
        Self {
            weekly_steps: (BASE_WEEKLY_STEPS * multiplier).floor() as u64,
            weekly_calories: (BASE_WEEKLY_CALORIES * multiplier).floor() as u64,
            exercise_sessions: (BASE_EXERCISE_SESSIONS * multiplier).floor() as u32,
            sleep_hours: WEEKLY_SLEEP_HOURS,
        }
    }
}

/// Beginner 1.2, Intermediate 1.5, Advanced 1.8
#[must_use]
pub const fn goal_multiplier(fitness_level: FitnessLevel) -> f64 {
    match fitness_level {
        FitnessLevel::Beginner => 1.2,
        FitnessLevel::Intermediate => 1.5,
        FitnessLevel::Advanced => 1.8,
    }
}

/// Goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GoalCategory {
    /// Weekly steps
    Steps,
    /// Weekly calories
    Calories,
    /// Exercise sessions
    Sessions,
    /// Weekly sleep
    Sleep,
}

/// Progress classification against a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// At or above 100%
    Achieved,
    /// At or above 80%
    OnTrack,
    /// Below 80%
    Behind,
}

impl GoalStatus {
    /// Classify an achievement percentage
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= ACHIEVED_PERCENT {
            Self::Achieved
        } else if percent >= ON_TRACK_PERCENT {
            Self::OnTrack
        } else {
            Self::Behind
        }
    }
}

/// Achievement against one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalAchievement {
    /// Goal category
    pub category: GoalCategory,
    /// Actual weekly value
    pub actual: f64,
    /// Goal value
    pub goal: f64,
    /// `actual / goal * 100`, `None` for a zero goal
    pub achievement_percent: Option<f64>,
    /// Classification, `None` for a zero goal
    pub status: Option<GoalStatus>,
}

impl GoalAchievement {
    fn new(category: GoalCategory, actual: f64, goal: f64) -> Self {
        let achievement_percent = (goal > 0.0)
            .then(|| actual / goal * 100.0)
            .filter(|percent| percent.is_finite());
        Self {
            category,
            actual,
            goal,
            achievement_percent,
            status: achievement_percent.map(GoalStatus::from_percent),
        }
    }
}

/// Goal achievement for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalReport {
    /// Target user
    pub user_id: String,
    /// Fitness level the defaults were derived from
    pub fitness_level: FitnessLevel,
    /// Goals used
    pub goals: WeeklyGoals,
    /// Achievement per category (steps, calories, sessions, sleep)
    pub achievements: Vec<GoalAchievement>,
}

/// Goal achievement computation
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalTracker;

impl GoalTracker {
    /// Compare the user's week against the given goals, or the fitness-level defaults
    #[must_use]
    pub fn achievements(record: &UserRecord, goals: Option<WeeklyGoals>) -> GoalReport {
        let goals = goals.unwrap_or_else(|| WeeklyGoals::for_fitness_level(record.fitness_level));
        let achievements = vec![
            GoalAchievement::new(
                GoalCategory::Steps,
                record.total_steps as f64,
                goals.weekly_steps as f64,
            ),
            GoalAchievement::new(
                GoalCategory::Calories,
                record.total_calories_burned,
                goals.weekly_calories as f64,
            ),
            GoalAchievement::new(
                GoalCategory::Sessions,
                f64::from(record.exercise_sessions),
                f64::from(goals.exercise_sessions),
            ),
            GoalAchievement::new(GoalCategory::Sleep, record.sleep_hours_total, goals.sleep_hours),
        ];

        GoalReport {
            user_id: record.user_id.clone(),
            fitness_level: record.fitness_level,
            goals,
            achievements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master_table::test_support::table;

    #[test]
    fn test_default_goals_per_level() {
        let beginner = WeeklyGoals::for_fitness_level(FitnessLevel::Beginner);
        assert_eq!(beginner.weekly_steps, 60_000);
        assert_eq!(beginner.weekly_calories, 2_400);
        assert_eq!(beginner.exercise_sessions, 4);

        let intermediate = WeeklyGoals::for_fitness_level(FitnessLevel::Intermediate);
        assert_eq!(intermediate.weekly_steps, 75_000);
        assert_eq!(intermediate.exercise_sessions, 6);

        let advanced = WeeklyGoals::for_fitness_level(FitnessLevel::Advanced);
        assert_eq!(advanced.weekly_steps, 90_000);
        assert_eq!(advanced.weekly_calories, 3_600);
        assert_eq!(advanced.exercise_sessions, 7);
        assert!((advanced.sleep_hours - 56.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(GoalStatus::from_percent(100.0), GoalStatus::Achieved);
        assert_eq!(GoalStatus::from_percent(80.0), GoalStatus::OnTrack);
        assert_eq!(GoalStatus::from_percent(79.9), GoalStatus::Behind);
    }

    #[test]
    fn test_achievements_against_defaults() {
        let table = table(&[("USR001", 30, "Beginner", 60_000)]);
        let report = GoalTracker::achievements(table.get("USR001").unwrap(), None);

        let steps = report.achievements[0];
        assert_eq!(steps.category, GoalCategory::Steps);
        assert_eq!(steps.achievement_percent, Some(100.0));
        assert_eq!(steps.status, Some(GoalStatus::Achieved));

        // 2800 of 2400 calories, 4 of 4 sessions, 52.5 of 56 sleep hours
        assert_eq!(report.achievements[1].status, Some(GoalStatus::Achieved));
        assert_eq!(report.achievements[2].achievement_percent, Some(100.0));
        assert_eq!(report.achievements[3].status, Some(GoalStatus::OnTrack));
    }

    #[test]
    fn test_zero_goal_has_no_achievement() {
        let table = table(&[("USR001", 30, "Beginner", 60_000)]);
        let goals = WeeklyGoals {
            weekly_steps: 0,
            weekly_calories: 2_000,
            exercise_sessions: 0,
            sleep_hours: 56.0,
        };
        let report = GoalTracker::achievements(table.get("USR001").unwrap(), Some(goals));

        assert_eq!(report.achievements[0].achievement_percent, None);
        assert_eq!(report.achievements[0].status, None);
        assert_eq!(report.achievements[2].achievement_percent, None);
        assert!(report.achievements[1].achievement_percent.is_some());
    }
}
