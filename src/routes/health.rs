// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness plus readiness with loaded row counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` answers as long as the process serves requests. `/ready` also
//! reports how many users the master table holds and when it was built.

use crate::resources::AnalyticsResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<AnalyticsResources>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<AnalyticsResources>>,
        ) -> Json<serde_json::Value> {
            let table = &resources.master_table;
            Json(serde_json::json!({
                "status": if table.is_empty() { "empty" } else { "ready" },
                "users": table.len(),
                "dropped_rows": table.dropped_rows(),
                "insurance_providers": resources.insurance.provider_count(),
                "insurance_services": resources.insurance.service_count(),
                "loaded_at": resources.loaded_at.to_rfc3339(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
