// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Writes CSV source fixtures into temp directories and builds analytics resources
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_user_analytics`
//!
//! The fixture holds five demographic rows. Four join fully; `USR005` has no
//! physical or activity row and is dropped by the master table.
//!
//! | user   | age | level        | steps  | provider    |
//! |--------|-----|--------------|--------|-------------|
//! | USR001 | 30  | Intermediate | 60000  | HealthFirst |
//! | USR002 | 32  | Intermediate | 45000  | CarePlus    |
//! | USR003 | 28  | Intermediate | 80000  | (none)      |
//! | USR004 | 50  | Advanced     | 90000  | HealthFirst |

use pierre_user_analytics::{
    config::{DataSourcesConfig, Environment, ServerConfig},
    resources::AnalyticsResources,
};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const DEMOGRAPHICS_CSV: &str = "\
user_id,first_name,last_name,age,gender,city,occupation
USR001,Alice,Smith,30,Female,Portland,Engineer
USR002,Bob,Jones,32,Male,Denver,Teacher
USR003,Carol,White,28,female,Austin,Nurse
USR004,Dan,Brown,50,Male,Boston,Chef
USR005,Eve,Black,41,Female,Miami,Designer
";

pub const PHYSICAL_CSV: &str = "\
user_id,bmi,fitness_level,resting_heart_rate,avg_heart_rate,max_heart_rate,blood_pressure_systolic,blood_pressure_diastolic
USR001,22.5,Intermediate,62,118,182,118,76
USR002,27.1,Intermediate,70,125,178,128,84
USR003,21.0, intermediate ,58,112,185,112,72
USR004,24.0,Advanced,52,108,176,115,74
";

pub const ACTIVITY_CSV: &str = "\
user_id,total_steps,total_calories_burned,total_active_minutes,exercise_sessions,exercise_frequency_per_week,workout_types,sleep_hours_total,sleep_hours_avg,medical_conditions,current_insurance_provider
USR001,60000,2800,280,4,4,\"Running, Yoga\",52.5,7.5,None,HealthFirst
USR002,45000,2100,0,2,2,Walking,42,6,Hypertension,CarePlus
USR003,80000,3400,400,6,6,\"Cycling, Swimming\",56,8,,
USR004,90000,4200,520,6,6,CrossFit,59.5,8.5,None,HealthFirst
";

pub const INSURANCE_PROVIDERS_CSV: &str = "\
provider_id,provider_name
INS001,HealthFirst
INS002,CarePlus
";

pub const INSURANCE_SERVICES_CSV: &str = "\
service_id,provider_id,service_name
SRV001,INS001,Gym Discount
SRV002,INS001,Annual Checkup
SRV003,INS002,Step Challenge Bonus
";

/// Write one source file into `dir`
pub fn write_source(dir: &Path, file_name: &str, contents: &str) {
    fs::write(dir.join(file_name), contents).expect("Failed to write fixture source");
}

/// Write the standard five-source fixture into `dir`
pub fn write_fixture(dir: &Path) {
    let names = DataSourcesConfig::default();
    write_source(dir, &names.demographics_file, DEMOGRAPHICS_CSV);
    write_source(dir, &names.physical_file, PHYSICAL_CSV);
    write_source(dir, &names.activity_file, ACTIVITY_CSV);
    write_source(dir, &names.insurance_providers_file, INSURANCE_PROVIDERS_CSV);
    write_source(dir, &names.insurance_services_file, INSURANCE_SERVICES_CSV);
}

/// Temp directory holding the standard fixture
pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_fixture(dir.path());
    dir
}

/// Test configuration reading sources from `data_dir`
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        data: DataSourcesConfig::in_dir(data_dir),
        ..ServerConfig::default()
    }
}

/// Load resources from the standard fixture
///
/// The returned `TempDir` must outlive any reload of the sources.
pub fn create_test_resources() -> (TempDir, Arc<AnalyticsResources>) {
    init_test_logging();
    let dir = fixture_dir();
    let resources = AnalyticsResources::load(test_config(dir.path()))
        .expect("Fixture sources should load");
    (dir, Arc::new(resources))
}
