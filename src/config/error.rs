//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Scoring service base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Retry count exceeds maximum allowed (10)")]
    RetryCountTooLarge,
}
