// ABOUTME: Main library entry point for the Pierre user analytics service
// ABOUTME: Loads fitness datasets, builds the master table, and serves analytics over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre User Analytics
//!
//! Personalized fitness analytics for individual users. The service joins
//! demographic, physical, and weekly activity datasets into per-user
//! profiles, health scores, peer comparisons, and chart-ready dashboards, and
//! serves them behind a small read-only HTTP API.
//!
//! ## Architecture
//!
//! - **dataset**: CSV loading of the five sources
//! - **resources**: the immutable, shared analytics context
//! - **routes**: axum handlers over `pierre-intelligence`
//! - **server**: router assembly, middleware, graceful shutdown
//! - **config** / **logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_user_analytics::config::environment::ServerConfig;
//! use pierre_user_analytics::resources::AnalyticsResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(AnalyticsResources::load(config)?);
//!     pierre_user_analytics::server::run_server(resources).await
//! }
//! ```

/// Configuration management
pub mod config;

/// CSV loading of the analytics sources
pub mod dataset;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request ids, tracing, and CORS
pub mod middleware;

/// Shared analytics resources
pub mod resources;

/// `HTTP` routes for user analytics and health checks
pub mod routes;

/// HTTP server assembly
pub mod server;
