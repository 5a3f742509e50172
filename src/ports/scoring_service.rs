//! Scoring Service Port - Interface to the remote AHP scoring and
//! model service.
//!
//! The service owns the decision model (alternatives, criteria,
//! experts, accumulated expert matrices) and all numeric scoring:
//! priority vectors, consistency ratios, and TOPSIS distances. This
//! port abstracts it behind a uniform request/response contract so the
//! editing and orchestration flows never couple to a transport.
//!
//! Confirmation and rejection messages are passed through verbatim;
//! the service's wording is part of the observable behavior.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{AlternativeName, CriterionName, ExpertName};
use crate::domain::matrix::ComparisonMatrix;
use crate::domain::ranking::{InconsistencyIndices, RankedAlternative, RankingMethod, RankingReport};

/// Port for the remote scoring/model service.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Lists the registered expert labels (possibly empty).
    async fn list_experts(&self) -> Result<Vec<String>, ServiceError>;

    /// Lists the registered criterion labels (possibly empty).
    async fn list_criteria(&self) -> Result<Vec<String>, ServiceError>;

    /// Fetches the current alternative set: count plus ordered labels.
    async fn alternative_set(&self) -> Result<AlternativeSet, ServiceError>;

    /// Registers a new alternative; returns the confirmation message.
    async fn add_alternative(&self, name: &AlternativeName) -> Result<String, ServiceError>;

    /// Registers a new criterion; returns the confirmation message.
    async fn add_criterion(&self, name: &CriterionName) -> Result<String, ServiceError>;

    /// Registers a new expert; returns the confirmation message.
    async fn add_expert(&self, name: &ExpertName) -> Result<String, ServiceError>;

    /// Submits one expert's resolved matrix for one criterion.
    async fn submit_matrix(&self, submission: &MatrixSubmission) -> Result<String, ServiceError>;

    /// Computes one method's ranking over the accumulated matrices.
    async fn rank(&self, method: RankingMethod) -> Result<Vec<RankedAlternative>, ServiceError>;

    /// Fetches per-expert, per-criterion inconsistency indices.
    async fn inconsistency_indices(&self) -> Result<InconsistencyIndices, ServiceError>;

    /// Fetches rankings for every method, inconsistency indices, and
    /// labeled aggregated matrices in one request.
    async fn combined_report(&self) -> Result<RankingReport, ServiceError>;

    /// Uploads a saved model file; returns the confirmation message.
    async fn upload_model(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ServiceError>;

    /// Downloads the current model as a file.
    async fn download_model(&self, filename: &str) -> Result<Vec<u8>, ServiceError>;

    /// Clears the whole model; returns the confirmation message.
    async fn clear_model(&self) -> Result<String, ServiceError>;
}

/// The alternative set reported by the model service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSet {
    /// Number of alternatives the service believes it holds.
    pub count: usize,
    /// Ordered display labels.
    pub labels: Vec<String>,
}

impl AlternativeSet {
    /// Creates a new alternative set.
    pub fn new(count: usize, labels: Vec<String>) -> Self {
        Self { count, labels }
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }
}

/// One expert's completed matrix for one criterion, packaged for
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSubmission {
    /// Correlation id for tracing this submission through logs.
    pub submission_id: Uuid,
    pub expert: ExpertName,
    pub criterion: CriterionName,
    pub matrix: ComparisonMatrix,
}

impl MatrixSubmission {
    /// Creates a new submission with a fresh correlation id.
    pub fn new(expert: ExpertName, criterion: CriterionName, matrix: ComparisonMatrix) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            expert,
            criterion,
            matrix,
        }
    }
}

/// Scoring service errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    /// The service returned a structured error message.
    #[error("{message}")]
    Rejected {
        /// The service's message, verbatim.
        message: String,
    },

    /// The network call itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Creates a rejection carrying the service's verbatim message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns true if retrying the same request could succeed.
    ///
    /// Rejections and decode failures are deterministic; only
    /// transport-level failures are worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::Transport(_) | ServiceError::Timeout { .. }
        )
    }
}
