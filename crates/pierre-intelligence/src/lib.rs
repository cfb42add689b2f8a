// ABOUTME: User analytics engine: master table join, health score, peers, progress, and goals
// ABOUTME: Pure computations over an immutable snapshot of the loaded sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Analytics over the joined per-user master table. Nothing in this crate
//! performs I/O: sources arrive already loaded, and every operation reads
//! from an immutable [`MasterTable`].
//!
//! ## Modules
//!
//! - **`master_table`**: inner join of the per-user sources with derived metrics
//! - **`health_score`**: composite 0-100 score
//! - **`profile`**: nested per-user profile view
//! - **`peer_comparison`**: fitness-level and age cohort percentiles
//! - **`progress`**: seeded multi-week trajectories
//! - **`goals`**: fitness-level goal defaults and achievement
//! - **`weekly_report`**: weekly summary with recommendations
//! - **`charts`**: chart-ready dashboard payloads
//! - **`insurance`**: provider lookup and service listing

/// Composite health score
pub mod health_score;

/// Insurance provider catalog
pub mod insurance;

/// Joined per-user table and derived metrics
pub mod master_table;

/// Profile assembly
pub mod profile;

/// Peer cohort comparison
pub mod peer_comparison;

/// Seeded progress trajectories
pub mod progress;

/// Goal defaults and achievement tracking
pub mod goals;

/// Weekly summary report
pub mod weekly_report;

/// Dashboard chart composition
pub mod charts;

pub use charts::{ChartComposer, ChartPayload, DashboardChartBuilder};
pub use goals::{GoalReport, GoalTracker, WeeklyGoals};
pub use health_score::{calculate_health_score, HealthScoreBreakdown, HealthScoreInputs};
pub use insurance::{InsuranceCatalog, ProviderServices};
pub use master_table::{DerivedMetrics, MasterTable, SourceTables, UserRecord};
pub use peer_comparison::{PeerComparator, PeerComparison};
pub use profile::{get_profile, UserProfile};
pub use progress::{ProgressTracker, WeeklyProgress};
pub use weekly_report::WeeklyReport;
