// ABOUTME: Core types and constants for Pierre user analytics
// ABOUTME: Foundation crate with error handling, source data models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre user
//! analytics service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring thresholds and defaults organized by domain
//! - **models**: Row types for the demographic, physical, activity, and insurance sources

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Source data models (demographics, physical, activity, insurance)
pub mod models;
