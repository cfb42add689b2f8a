// ABOUTME: Environment configuration for the analytics server
// ABOUTME: Reads ports, data source paths, peer and progress defaults, and CORS origins
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use crate::errors::{AppError, AppResult};
use pierre_core::constants::{peers, progress};
use std::env;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8000;
/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the five tabular sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourcesConfig {
    /// Directory the file names are resolved against
    pub data_dir: PathBuf,
    /// Demographics file name
    pub demographics_file: String,
    /// Physical attributes file name
    pub physical_file: String,
    /// Weekly activity file name
    pub activity_file: String,
    /// Insurance providers file name
    pub insurance_providers_file: String,
    /// Insurance services file name
    pub insurance_services_file: String,
}

impl Default for DataSourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            demographics_file: "users_demographic.csv".into(),
            physical_file: "users_physical.csv".into(),
            activity_file: "users_activity_weekly.csv".into(),
            insurance_providers_file: "insurance_providers.csv".into(),
            insurance_services_file: "insurance_services.csv".into(),
        }
    }
}

impl DataSourcesConfig {
    /// Sources with default file names inside `data_dir`
    #[must_use]
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Full path of the demographics source
    #[must_use]
    pub fn demographics_path(&self) -> PathBuf {
        self.data_dir.join(&self.demographics_file)
    }

    /// Full path of the physical attributes source
    #[must_use]
    pub fn physical_path(&self) -> PathBuf {
        self.data_dir.join(&self.physical_file)
    }

    /// Full path of the weekly activity source
    #[must_use]
    pub fn activity_path(&self) -> PathBuf {
        self.data_dir.join(&self.activity_file)
    }

    /// Full path of the insurance providers source
    #[must_use]
    pub fn insurance_providers_path(&self) -> PathBuf {
        self.data_dir.join(&self.insurance_providers_file)
    }

    /// Full path of the insurance services source
    #[must_use]
    pub fn insurance_services_path(&self) -> PathBuf {
        self.data_dir.join(&self.insurance_services_file)
    }
}

/// Peer comparison and progress defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Cohort size when a request names none
    pub peer_top_n: usize,
    /// Inclusive age window for cohorts
    pub peer_age_window: u32,
    /// Trajectory length when a request names none
    pub progress_weeks: u32,
    /// Base seed for synthetic trajectories
    pub progress_seed: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            peer_top_n: peers::DEFAULT_TOP_N,
            peer_age_window: peers::DEFAULT_AGE_WINDOW,
            progress_weeks: progress::DEFAULT_WEEKS,
            progress_seed: progress::DEFAULT_SEED,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Data source locations
    pub data: DataSourcesConfig,
    /// Analytics defaults
    pub analytics: AnalyticsConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.into(),
            environment: Environment::default(),
            data: DataSourcesConfig::default(),
            analytics: AnalyticsConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric variable does not parse or a value is out of range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let defaults = DataSourcesConfig::default();
        let config = Self {
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            host: env_var_or("HOST", DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            data: DataSourcesConfig {
                data_dir: PathBuf::from(env_var_or("DATA_DIR", ".")),
                demographics_file: env_var_or("DEMOGRAPHICS_FILE", &defaults.demographics_file),
                physical_file: env_var_or("PHYSICAL_FILE", &defaults.physical_file),
                activity_file: env_var_or("ACTIVITY_FILE", &defaults.activity_file),
                insurance_providers_file: env_var_or(
                    "INSURANCE_PROVIDERS_FILE",
                    &defaults.insurance_providers_file,
                ),
                insurance_services_file: env_var_or(
                    "INSURANCE_SERVICES_FILE",
                    &defaults.insurance_services_file,
                ),
            },
            analytics: AnalyticsConfig {
                peer_top_n: parse_env("PEER_TOP_N", peers::DEFAULT_TOP_N)?,
                peer_age_window: parse_env("PEER_AGE_WINDOW", peers::DEFAULT_AGE_WINDOW)?,
                progress_weeks: parse_env("PROGRESS_WEEKS", progress::DEFAULT_WEEKS)?,
                progress_seed: parse_env("PROGRESS_SEED", progress::DEFAULT_SEED)?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the default trajectory length is outside `1..=52`
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=progress::MAX_WEEKS).contains(&self.analytics.progress_weeks) {
            return Err(AppError::config(format!(
                "PROGRESS_WEEKS must be between 1 and {}, got {}",
                progress::MAX_WEEKS,
                self.analytics.progress_weeks
            )));
        }
        if self.analytics.peer_top_n == 0 {
            warn!("PEER_TOP_N is 0; peer comparisons will always return an empty cohort");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre User Analytics Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Data Dir: {}\n\
             - Peer Cohort: top {} within {} years\n\
             - Progress: {} weeks, seed {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.data.data_dir.display(),
            self.analytics.peer_top_n,
            self.analytics.peer_age_window,
            self.analytics.progress_weeks,
            self.analytics.progress_seed,
            self.cors.allowed_origins
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config(format!("Invalid {key} value '{raw}'")).with_source(e)
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_source_paths_resolve_against_data_dir() {
        let sources = DataSourcesConfig::in_dir("/srv/data");
        assert_eq!(
            sources.activity_path(),
            PathBuf::from("/srv/data/users_activity_weekly.csv")
        );
        assert_eq!(
            sources.insurance_services_path(),
            PathBuf::from("/srv/data/insurance_services.csv")
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_weeks() {
        let mut config = ServerConfig::default();
        config.analytics.progress_weeks = 53;
        assert!(config.validate().is_err());
        config.analytics.progress_weeks = 52;
        assert!(config.validate().is_ok());
    }
}
