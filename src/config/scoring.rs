//! Scoring service configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Connection settings for the remote scoring service
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Base URL of the scoring service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum retries for read requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl ScoringConfig {
    /// Validate scoring service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > 10 {
            return Err(ValidationError::RetryCountTooLarge);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}
