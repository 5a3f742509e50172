//! Application configuration module
//!
//! This module provides type-safe configuration loading from
//! environment variables using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `AHP_WORKBENCH_` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_workbench::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scoring service at {}", config.scoring.base_url);
//! ```

mod error;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Scoring service connection settings
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads a `.env` file if present (for development)
    /// 2. Reads environment variables with the `AHP_WORKBENCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AHP_WORKBENCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
