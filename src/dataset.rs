// ABOUTME: CSV loader for the demographics, physical, activity, and insurance sources
// ABOUTME: Any missing file, missing column, or malformed row aborts with a DataLoad error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dataset Loader
//!
//! Reads the five tabular sources with headers. Columns are matched by name,
//! extra columns are ignored, and cells are trimmed. Empty cells in optional
//! columns (medical conditions, insurance provider) read as absent.

use crate::config::DataSourcesConfig;
use crate::errors::{AppError, AppResult};
use pierre_core::constants::sources;
use pierre_core::models::{
    ActivityRecord, DemographicRecord, InsuranceProvider, InsuranceService, PhysicalRecord,
};
use pierre_intelligence::SourceTables;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads every source named by a [`DataSourcesConfig`]
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    sources: DataSourcesConfig,
}

impl DatasetLoader {
    /// Loader for the given source locations
    #[must_use]
    pub const fn new(sources: DataSourcesConfig) -> Self {
        Self { sources }
    }

    /// Loader for the default file names inside `data_dir`
    #[must_use]
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(DataSourcesConfig::in_dir(data_dir))
    }

    /// Source locations
    #[must_use]
    pub const fn sources(&self) -> &DataSourcesConfig {
        &self.sources
    }

    /// Load all five sources
    ///
    /// # Errors
    ///
    /// Returns `DataLoad` naming the failing source when a file is missing or malformed
    pub fn load(&self) -> AppResult<SourceTables> {
        info!(data_dir = %self.sources.data_dir.display(), "Loading analytics sources");

        let tables = SourceTables {
            demographics: load_table::<DemographicRecord>(
                &self.sources.demographics_path(),
                sources::DEMOGRAPHICS,
            )?,
            physical: load_table::<PhysicalRecord>(
                &self.sources.physical_path(),
                sources::PHYSICAL,
            )?,
            activity: load_table::<ActivityRecord>(
                &self.sources.activity_path(),
                sources::ACTIVITY,
            )?,
            insurance_providers: load_table::<InsuranceProvider>(
                &self.sources.insurance_providers_path(),
                sources::INSURANCE_PROVIDERS,
            )?,
            insurance_services: load_table::<InsuranceService>(
                &self.sources.insurance_services_path(),
                sources::INSURANCE_SERVICES,
            )?,
        };

        info!(
            demographics = tables.demographics.len(),
            physical = tables.physical.len(),
            activity = tables.activity.len(),
            insurance_providers = tables.insurance_providers.len(),
            insurance_services = tables.insurance_services.len(),
            "Analytics sources loaded"
        );
        Ok(tables)
    }
}

/// Read one headered CSV file into typed rows
///
/// # Errors
///
/// Returns `DataLoad` when the file cannot be opened or a row does not deserialize
pub fn load_table<T: DeserializeOwned>(path: &Path, source: &str) -> AppResult<Vec<T>> {
    let file = File::open(path).map_err(|e| {
        AppError::data_load(source, format!("cannot open {}", path.display())).with_source(e)
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| csv_error(source, path, e))?;

    debug!(source, rows = rows.len(), path = %path.display(), "Source table read");
    Ok(rows)
}

fn csv_error(source: &str, path: &Path, error: csv::Error) -> AppError {
    let location = error
        .position()
        .map_or_else(String::new, |position| format!(" at line {}", position.line()));
    AppError::data_load(
        source,
        format!("malformed {}{location}: {error}", path.display()),
    )
    .with_source(error)
}
