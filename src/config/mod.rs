// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-driven server, data source, and analytics configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Pierre User Analytics
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{AnalyticsConfig, CorsConfig, DataSourcesConfig, Environment, ServerConfig};
