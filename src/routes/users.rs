// ABOUTME: Per-user analytics route handlers
// ABOUTME: Dashboard, progress, peer comparison, goals, weekly report, and insurance endpoints
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! User analytics routes
//!
//! Every handler is a synchronous computation over the immutable master
//! table. An unknown user id yields `404` with a JSON error body.

use super::json_response;
use crate::{errors::AppError, resources::AnalyticsResources};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Response,
    routing::get,
    Router,
};
use pierre_intelligence::{get_profile, ChartPayload, GoalTracker, UserProfile, WeeklyReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Query parameters for the progress endpoint
#[derive(Debug, Deserialize)]
struct ProgressQuery {
    #[serde(default)]
    weeks: Option<u32>,
}

/// Query parameters for the similar users endpoint
#[derive(Debug, Deserialize)]
struct SimilarQuery {
    #[serde(default)]
    top_n: Option<usize>,
}

/// Dashboard response body
#[derive(Debug, Serialize)]
struct DashboardResponse {
    profile: UserProfile,
    dashboard: ChartPayload,
}

/// User analytics routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user analytics routes
    pub fn routes(resources: Arc<AnalyticsResources>) -> Router {
        Router::new()
            .route("/user/:user_id/dashboard", get(Self::handle_dashboard))
            .route("/user/:user_id/progress", get(Self::handle_progress))
            .route("/user/:user_id/similar", get(Self::handle_similar))
            .route("/user/:user_id/goals", get(Self::handle_goals))
            .route("/user/:user_id/report", get(Self::handle_report))
            .route("/user/:user_id/insurance", get(Self::handle_insurance))
            .with_state(resources)
    }

    /// Handle dashboard request: profile plus chart payload
    async fn handle_dashboard(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let table = &resources.master_table;
        let profile = get_profile(table, &user_id)?;
        let record = table.require(&user_id)?;
        let peers: Vec<_> = table.with_fitness_level(record.fitness_level).collect();

        let dashboard = resources
            .chart_composer
            .compose(&profile, record, &peers)?;

        debug!(user_id = %user_id, panels = dashboard.panels.len(), "Dashboard composed");
        json_response(&DashboardResponse { profile, dashboard })
    }

    /// Handle weekly progress request
    async fn handle_progress(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
        query: Result<Query<ProgressQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = query.map_err(query_error)?;
        let record = resources.master_table.require(&user_id)?;
        let tracker = resources.progress_tracker;
        let weeks = params.weeks.unwrap_or_else(|| tracker.default_weeks());

        let progress = tracker.weekly_progress(record, weeks)?;
        json_response(&progress)
    }

    /// Handle peer comparison request
    async fn handle_similar(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
        query: Result<Query<SimilarQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = query.map_err(query_error)?;
        let top_n = params
            .top_n
            .unwrap_or(resources.config.analytics.peer_top_n);

        let comparison =
            resources
                .peer_comparator
                .compare(&resources.master_table, &user_id, top_n)?;
        json_response(&comparison)
    }

    /// Handle goal achievement request
    async fn handle_goals(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let record = resources.master_table.require(&user_id)?;
        json_response(&GoalTracker::achievements(record, None))
    }

    /// Handle weekly report request
    async fn handle_report(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let record = resources.master_table.require(&user_id)?;
        json_response(&WeeklyReport::for_record(record))
    }

    /// Handle insurance services request
    async fn handle_insurance(
        State(resources): State<Arc<AnalyticsResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let record = resources.master_table.require(&user_id)?;
        let services = resources.insurance.provider_services(
            record.current_insurance_provider.as_deref(),
            record.provider_id.as_deref(),
        );
        json_response(&services)
    }
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}
