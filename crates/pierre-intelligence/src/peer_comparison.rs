// ABOUTME: Peer cohort selection by fitness level and age proximity
// ABOUTME: Computes peer averages and strict-below percentiles for a fixed metric set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Peer Comparison
//!
//! A user's cohort is every other user with the same fitness level whose age
//! is within the configured window (inclusive). The cohort is ordered by age
//! distance, then user id, and truncated to the requested size.
//!
//! The percentile of a metric is the share of cohort members whose value is
//! strictly below the user's value, scaled to 0-100. An empty cohort yields
//! `None` averages and percentiles.

use crate::master_table::{MasterTable, UserRecord};
use pierre_core::constants::peers::{DEFAULT_AGE_WINDOW, DEFAULT_TOP_N};
use pierre_core::errors::AppResult;
use pierre_core::models::FitnessLevel;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Metrics compared against the cohort
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    /// Weekly steps
    TotalSteps,
    /// Weekly calories burned
    TotalCaloriesBurned,
    /// Weekly active minutes
    TotalActiveMinutes,
    /// Composite health score
    HealthScore,
}

impl ComparisonMetric {
    /// Every compared metric
    pub const ALL: [Self; 4] = [
        Self::TotalSteps,
        Self::TotalCaloriesBurned,
        Self::TotalActiveMinutes,
        Self::HealthScore,
    ];

    /// Read the metric from a row
    #[must_use]
    pub fn value(self, record: &UserRecord) -> f64 {
        match self {
            Self::TotalSteps => record.total_steps as f64,
            Self::TotalCaloriesBurned => record.total_calories_burned,
            Self::TotalActiveMinutes => f64::from(record.total_active_minutes),
            Self::HealthScore => f64::from(record.metrics.health_score),
        }
    }
}

/// User value against the cohort for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricComparison {
    /// The user's own value
    pub user_value: f64,
    /// Cohort mean, `None` for an empty cohort
    pub peer_average: Option<f64>,
    /// Share of the cohort strictly below the user (0-100), `None` for an empty cohort
    pub percentile: Option<f64>,
}

impl MetricComparison {
    fn against(user_value: f64, peer_values: &[f64]) -> Self {
        if peer_values.is_empty() {
            return Self {
                user_value,
                peer_average: None,
                percentile: None,
            };
        }
        let count = peer_values.len() as f64;
        let below = peer_values.iter().filter(|&&v| v < user_value).count() as f64;
        Self {
            user_value,
            peer_average: Some(peer_values.iter().sum::<f64>() / count),
            percentile: Some(below / count * 100.0),
        }
    }
}

/// Result of comparing one user against their cohort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerComparison {
    /// Target user
    pub user_id: String,
    /// Target fitness level
    pub fitness_level: FitnessLevel,
    /// Number of cohort members after truncation
    pub cohort_size: usize,
    /// Cohort member ids in cohort order
    pub peer_ids: Vec<String>,
    /// Per-metric comparison
    pub metrics: BTreeMap<ComparisonMetric, MetricComparison>,
}

/// Cohort selection and percentile computation
#[derive(Debug, Clone, Copy)]
pub struct PeerComparator {
    age_window: u32,
}

impl Default for PeerComparator {
    fn default() -> Self {
        Self::new(DEFAULT_AGE_WINDOW)
    }
}

impl PeerComparator {
    /// Comparator with the given inclusive age window
    #[must_use]
    pub const fn new(age_window: u32) -> Self {
        Self { age_window }
    }

    /// Inclusive age window in years
    #[must_use]
    pub const fn age_window(&self) -> u32 {
        self.age_window
    }

    /// Select the cohort of `target`, ordered by (age distance, `user_id`) and capped at `top_n`
    #[must_use]
    pub fn cohort<'a>(
        &self,
        table: &'a MasterTable,
        target: &UserRecord,
        top_n: usize,
    ) -> Vec<&'a UserRecord> {
        let mut cohort: Vec<&UserRecord> = table
            .with_fitness_level(target.fitness_level)
            .filter(|peer| peer.user_id != target.user_id)
            .filter(|peer| peer.age.abs_diff(target.age) <= self.age_window)
            .collect();
        cohort.sort_by(|a, b| {
            a.age
                .abs_diff(target.age)
                .cmp(&b.age.abs_diff(target.age))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        cohort.truncate(top_n);
        cohort
    }

    /// Compare a user against their cohort
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no row in the master table
    pub fn compare(
        &self,
        table: &MasterTable,
        user_id: &str,
        top_n: usize,
    ) -> AppResult<PeerComparison> {
        let target = table.require(user_id)?;
        let cohort = self.cohort(table, target, top_n);

        debug!(
            user_id,
            cohort_size = cohort.len(),
            age_window = self.age_window,
            "Peer cohort selected"
        );

        let metrics = ComparisonMetric::ALL
            .into_iter()
            .map(|metric| {
                let peer_values: Vec<f64> = cohort.iter().map(|peer| metric.value(peer)).collect();
                (
                    metric,
                    MetricComparison::against(metric.value(target), &peer_values),
                )
            })
            .collect();

        Ok(PeerComparison {
            user_id: target.user_id.clone(),
            fitness_level: target.fitness_level,
            cohort_size: cohort.len(),
            peer_ids: cohort.iter().map(|peer| peer.user_id.clone()).collect(),
            metrics,
        })
    }

    /// Compare with the default cohort size
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no row in the master table
    pub fn compare_default(&self, table: &MasterTable, user_id: &str) -> AppResult<PeerComparison> {
        self.compare(table, user_id, DEFAULT_TOP_N)
    }
}
