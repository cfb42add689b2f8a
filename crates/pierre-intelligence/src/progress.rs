// ABOUTME: Seeded synthetic weekly trajectories built from a user's current weekly totals
// ABOUTME: Applies 2% weekly progression with normal noise and summarizes week-over-week change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progress Tracking
//!
//! Trajectories are illustrative: the sources hold a single week per user, so
//! earlier weeks are generated from the current totals. Each user gets their
//! own `ChaCha8` stream seeded from the configured seed and the user id, which
//! makes a trajectory reproducible across requests and restarts.

use crate::master_table::UserRecord;
use pierre_core::constants::progress::{
    DEFAULT_SEED, DEFAULT_WEEKS, MAX_WEEKS, NOISE_STD_DEV, WEEKLY_PROGRESSION,
};
use pierre_core::errors::{AppError, AppResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Weeks shown by the health score trend panel
pub const TREND_WEEKS: u32 = 12;
/// Points below the current score where the trend starts
const TREND_OFFSET: f64 = 20.0;
/// Points gained per trend week
const TREND_SLOPE: f64 = 2.0;
/// Standard deviation of trend noise
const TREND_NOISE_STD_DEV: f64 = 3.0;

/// One generated week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekSnapshot {
    /// 1-based week number
    pub week: u32,
    /// Steps in the week
    pub total_steps: u64,
    /// Calories burned in the week
    pub total_calories_burned: u64,
    /// Exercise sessions in the week (at least 1)
    pub exercise_sessions: u32,
}

/// Latest week minus the previous week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressChange {
    /// Steps change
    pub steps_change: i64,
    /// Calories change
    pub calories_change: i64,
    /// Sessions change
    pub sessions_change: i64,
}

impl ProgressChange {
    fn between(previous: &WeekSnapshot, latest: &WeekSnapshot) -> Self {
        Self {
            steps_change: signed_delta(latest.total_steps, previous.total_steps),
            calories_change: signed_delta(
                latest.total_calories_burned,
                previous.total_calories_burned,
            ),
            sessions_change: i64::from(latest.exercise_sessions)
                - i64::from(previous.exercise_sessions),
        }
    }
}

/// Generated trajectory for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyProgress {
    /// Target user
    pub user_id: String,
    /// Weeks in chronological order
    pub weeks: Vec<WeekSnapshot>,
    /// Change summary, present with at least two weeks
    pub changes: Option<ProgressChange>,
}

/// One point of the health score trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// 1-based week number
    pub week: u32,
    /// Health score estimate for the week
    pub health_score: f64,
}

/// Seeded trajectory generator
#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker {
    seed: u64,
    default_weeks: u32,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_WEEKS)
    }
}

impl ProgressTracker {
    /// Tracker with a base seed and the number of weeks used when a request names none
    #[must_use]
    pub const fn new(seed: u64, default_weeks: u32) -> Self {
        Self {
            seed,
            default_weeks,
        }
    }

    /// Weeks generated when a request names none
    #[must_use]
    pub const fn default_weeks(&self) -> u32 {
        self.default_weeks
    }

    /// Generate `weeks` weeks of progression from the user's current totals
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `weeks` is outside `1..=52`
    pub fn weekly_progress(&self, record: &UserRecord, weeks: u32) -> AppResult<WeeklyProgress> {
        validate_weeks(weeks)?;
        let noise = normal(1.0, NOISE_STD_DEV)?;
        let mut rng = self.rng_for(&record.user_id);

        let base_steps = record.total_steps as f64;
        let base_calories = record.total_calories_burned;
        let base_sessions = f64::from(record.exercise_sessions);

        let snapshots: Vec<WeekSnapshot> = (0..weeks)
            .map(|week| {
                let factor = f64::from(week).mul_add(WEEKLY_PROGRESSION, 1.0)
                    * noise.sample(&mut rng);
                WeekSnapshot {
                    week: week + 1,
                    total_steps: floor_non_negative(base_steps * factor) as u64,
                    total_calories_burned: floor_non_negative(base_calories * factor) as u64,
                    exercise_sessions: (floor_non_negative(base_sessions * factor) as u32).max(1),
                }
            })
            .collect();

        let changes = match snapshots.as_slice() {
            [.., previous, latest] => Some(ProgressChange::between(previous, latest)),
            _ => None,
        };

        Ok(WeeklyProgress {
            user_id: record.user_id.clone(),
            weeks: snapshots,
            changes,
        })
    }

    /// Illustrative health score trend ending near the user's current score
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the noise distribution cannot be built
    pub fn health_score_trend(
        &self,
        record: &UserRecord,
        weeks: u32,
    ) -> AppResult<Vec<TrendPoint>> {
        let noise = normal(0.0, TREND_NOISE_STD_DEV)?;
        let mut rng = self.rng_for(&record.user_id);
        let score = f64::from(record.metrics.health_score);
        Ok((1..=weeks)
            .map(|week| TrendPoint {
                week,
                health_score: f64::from(week).mul_add(TREND_SLOPE, score - TREND_OFFSET)
                    + noise.sample(&mut rng),
            })
            .collect())
    }

    fn rng_for(&self, user_id: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed ^ fnv1a(user_id.as_bytes()))
    }
}

/// Check a requested trajectory length
///
/// # Errors
///
/// Returns `InvalidInput` when `weeks` is outside `1..=52`
pub fn validate_weeks(weeks: u32) -> AppResult<()> {
    if (1..=MAX_WEEKS).contains(&weeks) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "weeks must be between 1 and {MAX_WEEKS}, got {weeks}"
        )))
    }
}

fn signed_delta(latest: u64, previous: u64) -> i64 {
    if latest >= previous {
        i64::try_from(latest - previous).unwrap_or(i64::MAX)
    } else {
        i64::try_from(previous - latest).map_or(i64::MIN, |delta| -delta)
    }
}

fn floor_non_negative(value: f64) -> f64 {
    value.floor().max(0.0)
}

fn normal(mean: f64, std_dev: f64) -> AppResult<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| AppError::internal(format!("invalid noise distribution: {e}")))
}

// Stable across platforms and releases, unlike `DefaultHasher`
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}
