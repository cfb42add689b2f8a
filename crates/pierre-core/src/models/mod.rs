// ABOUTME: Core data models for the Pierre user analytics sources
// ABOUTME: Re-exports per-user source records, categoricals, and insurance records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Row types for the five tabular sources the analytics service is built on.
//! Categorical columns are kept as raw strings on the rows and validated into
//! [`FitnessLevel`] and [`Gender`] when the master table is assembled.

mod insurance;
mod user;

pub use insurance::{InsuranceProvider, InsuranceService};
pub use user::{ActivityRecord, DemographicRecord, FitnessLevel, Gender, PhysicalRecord};
