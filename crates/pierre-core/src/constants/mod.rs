// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring thresholds, cohort defaults, goal baselines, and source names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Analytics constants grouped by domain. Thresholds here define the
//! health score contract and must not drift between releases.

/// Calendar constants
pub mod time {
    /// Days in one activity week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Composite health score thresholds and weights
pub mod health_score {
    /// Starting score before any term is applied
    pub const BASE_SCORE: i32 = 50;
    /// Lowest reportable score
    pub const MIN_SCORE: i32 = 0;
    /// Highest reportable score
    pub const MAX_SCORE: i32 = 100;

    /// Lower bound of the optimal BMI band (inclusive)
    pub const BMI_OPTIMAL_MIN: f64 = 18.5;
    /// Upper bound of the optimal BMI band (inclusive)
    pub const BMI_OPTIMAL_MAX: f64 = 25.0;
    /// Upper bound of the overweight BMI band (inclusive)
    pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;
    /// Points for an optimal BMI
    pub const BMI_OPTIMAL_POINTS: i32 = 15;
    /// Points for an overweight BMI
    pub const BMI_OVERWEIGHT_POINTS: i32 = 5;
    /// Points for any other BMI
    pub const BMI_OTHER_POINTS: i32 = -10;

    /// Weekly steps above which the high-activity bonus applies (10k/day)
    pub const STEPS_HIGH_THRESHOLD: u64 = 70_000;
    /// Weekly steps above which the moderate bonus applies (7k/day)
    pub const STEPS_MODERATE_THRESHOLD: u64 = 49_000;
    /// Points for high weekly steps
    pub const STEPS_HIGH_POINTS: i32 = 15;
    /// Points for moderate weekly steps
    pub const STEPS_MODERATE_POINTS: i32 = 10;
    /// Points for low weekly steps
    pub const STEPS_LOW_POINTS: i32 = 5;

    /// Lower bound of the optimal nightly sleep band (inclusive)
    pub const SLEEP_OPTIMAL_MIN: f64 = 7.0;
    /// Upper bound of the optimal nightly sleep band (inclusive)
    pub const SLEEP_OPTIMAL_MAX: f64 = 9.0;
    /// Points for optimal sleep
    pub const SLEEP_OPTIMAL_POINTS: i32 = 10;
    /// Points for any other sleep
    pub const SLEEP_OTHER_POINTS: i32 = 5;

    /// Sessions per week for the frequent-exercise bonus
    pub const FREQUENCY_HIGH_THRESHOLD: f64 = 5.0;
    /// Sessions per week for the regular-exercise bonus
    pub const FREQUENCY_MODERATE_THRESHOLD: f64 = 3.0;
    /// Points for frequent exercise
    pub const FREQUENCY_HIGH_POINTS: i32 = 10;
    /// Points for regular exercise
    pub const FREQUENCY_MODERATE_POINTS: i32 = 5;

    /// Penalty applied when any medical condition is reported
    pub const MEDICAL_CONDITION_PENALTY: i32 = -5;
}

/// Peer cohort selection defaults
pub mod peers {
    /// Default cohort size cap
    pub const DEFAULT_TOP_N: usize = 5;
    /// Default maximum age difference (inclusive) for a peer
    pub const DEFAULT_AGE_WINDOW: u32 = 5;
}

/// Goal tracking baselines
pub mod goals {
    /// Baseline weekly steps before the fitness-level multiplier
    pub const BASE_WEEKLY_STEPS: f64 = 50_000.0;
    /// Baseline weekly calories before the fitness-level multiplier
    pub const BASE_WEEKLY_CALORIES: f64 = 2_000.0;
    /// Baseline weekly sessions before the fitness-level multiplier
    pub const BASE_EXERCISE_SESSIONS: f64 = 4.0;
    /// Weekly sleep goal (8 hours a night)
    pub const WEEKLY_SLEEP_HOURS: f64 = 56.0;
    /// Achievement percentage at which a goal counts as met
    pub const ACHIEVED_PERCENT: f64 = 100.0;
    /// Achievement percentage at which a goal counts as on track
    pub const ON_TRACK_PERCENT: f64 = 80.0;
}

/// Weekly progress generation
pub mod progress {
    /// Default number of generated weeks
    pub const DEFAULT_WEEKS: u32 = 8;
    /// Largest number of weeks a caller may request
    pub const MAX_WEEKS: u32 = 52;
    /// Relative improvement applied per week
    pub const WEEKLY_PROGRESSION: f64 = 0.02;
    /// Standard deviation of the multiplicative weekly noise
    pub const NOISE_STD_DEV: f64 = 0.1;
    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 42;
}

/// Weekly report recommendation thresholds
pub mod recommendations {
    /// Weekly steps below which more walking is recommended
    pub const LOW_WEEKLY_STEPS: u64 = 49_000;
    /// Sessions below which more exercise is recommended
    pub const LOW_EXERCISE_SESSIONS: u32 = 3;
    /// Average nightly sleep below which more sleep is recommended
    pub const LOW_NIGHTLY_SLEEP_HOURS: f64 = 7.0;
}

/// Names of the tabular sources, used in logs and load errors
pub mod sources {
    /// Demographics table
    pub const DEMOGRAPHICS: &str = "demographics";
    /// Physical attributes table
    pub const PHYSICAL: &str = "physical";
    /// Weekly activity table
    pub const ACTIVITY: &str = "activity";
    /// Insurance providers table
    pub const INSURANCE_PROVIDERS: &str = "insurance_providers";
    /// Insurance services table
    pub const INSURANCE_SERVICES: &str = "insurance_services";
}

/// Service identity
pub mod service_names {
    /// Service name used in logs and health responses
    pub const PIERRE_USER_ANALYTICS: &str = "pierre-user-analytics";
}
