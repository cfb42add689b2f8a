// ABOUTME: Shared analytics resources built once at startup and injected into every route
// ABOUTME: Holds the master table, insurance catalog, analytics collaborators, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::dataset::DatasetLoader;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use pierre_intelligence::{
    ChartComposer, DashboardChartBuilder, InsuranceCatalog, MasterTable, PeerComparator,
    ProgressTracker, SourceTables,
};
use std::sync::Arc;
use tracing::info;

/// Centralized resource container for dependency injection
///
/// Everything here is immutable after construction. Handlers share one
/// instance through `Arc` and never lock.
#[derive(Clone)]
pub struct AnalyticsResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Joined per-user table
    pub master_table: Arc<MasterTable>,
    /// Provider lookup and service listing
    pub insurance: Arc<InsuranceCatalog>,
    /// Dashboard chart builder
    pub chart_composer: Arc<dyn ChartComposer>,
    /// Peer cohort selection
    pub peer_comparator: PeerComparator,
    /// Seeded progress generator
    pub progress_tracker: ProgressTracker,
    /// When the sources were loaded
    pub loaded_at: DateTime<Utc>,
}

impl AnalyticsResources {
    /// Load the configured sources and build the master table
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` when a source cannot be read and `ValidationFailed`
    /// when a categorical value cannot be encoded
    pub fn load(config: ServerConfig) -> AppResult<Self> {
        let tables = DatasetLoader::new(config.data.clone()).load()?;
        Self::from_tables(config, &tables)
    }

    /// Build resources from already loaded sources
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` on duplicate user ids and `ValidationFailed` on
    /// unmapped categorical values
    pub fn from_tables(config: ServerConfig, tables: &SourceTables) -> AppResult<Self> {
        let insurance = InsuranceCatalog::new(
            tables.insurance_providers.clone(),
            tables.insurance_services.clone(),
        );
        let master_table = MasterTable::build(tables, &insurance)?;

        let progress_tracker = ProgressTracker::new(
            config.analytics.progress_seed,
            config.analytics.progress_weeks,
        );
        let peer_comparator = PeerComparator::new(config.analytics.peer_age_window);

        info!(
            users = master_table.len(),
            providers = insurance.provider_count(),
            services = insurance.service_count(),
            "Analytics resources ready"
        );

        Ok(Self {
            config: Arc::new(config),
            master_table: Arc::new(master_table),
            insurance: Arc::new(insurance),
            chart_composer: Arc::new(DashboardChartBuilder::new(progress_tracker)),
            peer_comparator,
            progress_tracker,
            loaded_at: Utc::now(),
        })
    }

    /// Replace the dashboard chart composer
    #[must_use]
    pub fn with_chart_composer(mut self, chart_composer: Arc<dyn ChartComposer>) -> Self {
        self.chart_composer = chart_composer;
        self
    }
}
