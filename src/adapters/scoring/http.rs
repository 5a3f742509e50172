//! HTTP Scoring Service - Implementation of the ScoringService port
//! over the remote service's JSON routes.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ScoringServiceConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_max_retries(2);
//!
//! let service = HttpScoringService::new(config);
//! ```
//!
//! Read requests are retried with exponential backoff on transport
//! failures; mutating requests are sent exactly once and their
//! outcome, success or rejection, is reported verbatim.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{AlternativeName, CriterionName, ExpertName};
use crate::domain::matrix::ComparisonMatrix;
use crate::domain::ranking::{
    CriterionMatrices, InconsistencyIndices, LabeledMatrix, MethodSection, RankedAlternative,
    RankingMethod, RankingReport,
};
use crate::ports::{AlternativeSet, MatrixSubmission, ScoringService, ServiceError};

/// Configuration for the HTTP scoring service adapter.
#[derive(Debug, Clone)]
pub struct ScoringServiceConfig {
    /// Base URL of the scoring service.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retries for read requests on transient failures.
    pub max_retries: u32,
}

impl ScoringServiceConfig {
    /// Creates a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count for read requests.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// ScoringService implementation backed by the remote HTTP service.
pub struct HttpScoringService {
    config: ScoringServiceConfig,
    client: Client,
}

impl HttpScoringService {
    /// Creates a new adapter with the given configuration.
    pub fn new(config: ScoringServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the full URL for a service route.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Maps a reqwest error to the port's error taxonomy.
    fn map_send_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            ServiceError::transport(format!("Connection failed: {}", err))
        } else {
            ServiceError::transport(err.to_string())
        }
    }

    /// Sends a GET, retrying transient failures with backoff.
    async fn get_with_retry(&self, path: &str) -> Result<Response, ServiceError> {
        let url = self.url(path);
        let mut retry_count = 0;

        loop {
            tracing::debug!("GET {}", url);
            let outcome = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e));

            match outcome {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    tracing::warn!("GET {} failed ({}), retrying", url, err);
                    // Exponential backoff: 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(1 << retry_count)).await;
                    retry_count += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Sends a POST exactly once; mutations are never retried.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ServiceError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))
    }

    /// Checks the response status, surfacing service rejections
    /// verbatim.
    async fn handle_status(&self, response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejection_from_body(status.as_u16(), &body))
    }

    /// Decodes a successful JSON response body.
    async fn parse_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ServiceError> {
        response
            .json()
            .await
            .map_err(|e| ServiceError::decode(format!("Failed to parse response: {}", e)))
    }

    async fn get_parsed<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let response = self.get_with_retry(path).await?;
        let response = self.handle_status(response).await?;
        self.parse_json(response).await
    }

    async fn post_for_message<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ServiceError> {
        let response = self.post_json(path, body).await?;
        let response = self.handle_status(response).await?;
        let message: MessageResponse = self.parse_json(response).await?;
        Ok(message.message)
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn list_experts(&self) -> Result<Vec<String>, ServiceError> {
        let response: ExpertsResponse = self.get_parsed("/get_experts").await?;
        Ok(response.experts)
    }

    async fn list_criteria(&self) -> Result<Vec<String>, ServiceError> {
        let response: CriteriaResponse = self.get_parsed("/get_criteria").await?;
        Ok(response.criteria)
    }

    async fn alternative_set(&self) -> Result<AlternativeSet, ServiceError> {
        let response: AlternativeSetResponse =
            self.get_parsed("/get_number_of_alternatives").await?;
        Ok(AlternativeSet::new(
            response.number_of_alternatives,
            response.alternative_names,
        ))
    }

    async fn add_alternative(&self, name: &AlternativeName) -> Result<String, ServiceError> {
        self.post_for_message(
            "/add_alternative",
            &AddAlternativeRequest {
                alternative_name: name.as_str(),
            },
        )
        .await
    }

    async fn add_criterion(&self, name: &CriterionName) -> Result<String, ServiceError> {
        self.post_for_message(
            "/add_criterion",
            &AddCriterionRequest {
                criterion_name: name.as_str(),
            },
        )
        .await
    }

    async fn add_expert(&self, name: &ExpertName) -> Result<String, ServiceError> {
        self.post_for_message(
            "/add_expert",
            &AddExpertRequest {
                expert_name: name.as_str(),
            },
        )
        .await
    }

    async fn submit_matrix(&self, submission: &MatrixSubmission) -> Result<String, ServiceError> {
        tracing::debug!(
            "Submitting matrix {} for expert '{}', criterion '{}'",
            submission.submission_id,
            submission.expert,
            submission.criterion
        );
        self.post_for_message(
            "/add_expert_matrix",
            &SubmitMatrixRequest {
                expert_name: submission.expert.as_str(),
                criterion: submission.criterion.as_str(),
                matrix: &submission.matrix,
            },
        )
        .await
    }

    async fn rank(&self, method: RankingMethod) -> Result<Vec<RankedAlternative>, ServiceError> {
        let response: RankingResponse = self.get_parsed(method.endpoint_path()).await?;
        Ok(response.ranking.unwrap_or_default())
    }

    async fn inconsistency_indices(&self) -> Result<InconsistencyIndices, ServiceError> {
        let response: IndicesResponse = self.get_parsed("/get_inconsistency_indices").await?;
        Ok(response.inconsistency_indices.unwrap_or_default())
    }

    async fn combined_report(&self) -> Result<RankingReport, ServiceError> {
        let response: CombinedResponse = self.get_parsed("/calculate_all_rankings").await?;
        combined_to_report(response)
    }

    async fn upload_model(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ServiceError> {
        let url = self.url("/upload_model");
        tracing::debug!("POST {} ({} bytes)", url, bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = self.handle_status(response).await?;
        let message: MessageResponse = self.parse_json(response).await?;
        Ok(message.message)
    }

    async fn download_model(&self, filename: &str) -> Result<Vec<u8>, ServiceError> {
        let url = self.url("/download_model");
        tracing::debug!("GET {} (filename={})", url, filename);

        let response = self
            .client
            .get(&url)
            .query(&[("filename", filename)])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = self.handle_status(response).await?;

        let mut stream = response.bytes_stream();
        let mut data = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| ServiceError::decode(format!("Failed to read file stream: {}", e)))?;
            data.extend_from_slice(&chunk);
        }
        Ok(data)
    }

    async fn clear_model(&self) -> Result<String, ServiceError> {
        let response: MessageResponse = self.get_parsed("/clear_model").await?;
        Ok(response.message)
    }
}

/// Maps a non-success response to a port error, extracting the
/// service's structured `{"error": ...}` message when present.
fn rejection_from_body(status: u16, body: &str) -> ServiceError {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return ServiceError::rejected(parsed.error);
    }
    ServiceError::transport(format!("Unexpected status {}: {}", status, body))
}

/// Converts the combined response into a report, keeping the server's
/// section order.
fn combined_to_report(response: CombinedResponse) -> Result<RankingReport, ServiceError> {
    let mut report = RankingReport::new();

    if let Some(indices) = response.inconsistency_indices {
        report.set_inconsistency_indices(indices);
    }

    if let Some(rankings) = response.rankings {
        for (method, entries) in rankings {
            let entries: Vec<RankedAlternative> = serde_json::from_value(entries)
                .map_err(|e| ServiceError::decode(format!("Malformed ranking entries: {}", e)))?;
            report.push_method_section(MethodSection::new(method, entries));
        }
    }

    if let Some(criteria) = response.matrices_with_labels {
        let mut groups = Vec::new();
        for (criterion, matrices) in criteria {
            let matrices: Vec<WireLabeledMatrix> = serde_json::from_value(matrices)
                .map_err(|e| ServiceError::decode(format!("Malformed matrix group: {}", e)))?;
            let matrices = matrices
                .into_iter()
                .map(parse_labeled_matrix)
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(CriterionMatrices::new(criterion, matrices));
        }
        report.set_criterion_matrices(groups);
    }

    Ok(report)
}

/// Flattens the wire's label-keyed rows into an ordered labeled
/// matrix.
fn parse_labeled_matrix(wire: WireLabeledMatrix) -> Result<LabeledMatrix, ServiceError> {
    let mut labels = Vec::with_capacity(wire.values.len());
    let mut rows = Vec::with_capacity(wire.values.len());

    for (label, row) in wire.values {
        let cells = row
            .as_object()
            .ok_or_else(|| ServiceError::decode(format!("Matrix row '{}' is not an object", label)))?
            .values()
            .map(|value| {
                value.as_f64().ok_or_else(|| {
                    ServiceError::decode(format!("Non-numeric cell in matrix row '{}'", label))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        labels.push(label);
        rows.push(cells);
    }

    Ok(LabeledMatrix::new(labels, rows))
}

// ----- Wire types -----

#[derive(Debug, Deserialize)]
struct ExpertsResponse {
    experts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CriteriaResponse {
    criteria: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AlternativeSetResponse {
    number_of_alternatives: usize,
    alternative_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct AddAlternativeRequest<'a> {
    alternative_name: &'a str,
}

#[derive(Debug, Serialize)]
struct AddCriterionRequest<'a> {
    criterion_name: &'a str,
}

#[derive(Debug, Serialize)]
struct AddExpertRequest<'a> {
    expert_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SubmitMatrixRequest<'a> {
    expert_name: &'a str,
    criterion: &'a str,
    matrix: &'a ComparisonMatrix,
}

#[derive(Debug, Deserialize)]
struct RankingResponse {
    ranking: Option<Vec<RankedAlternative>>,
}

#[derive(Debug, Deserialize)]
struct IndicesResponse {
    inconsistency_indices: Option<InconsistencyIndices>,
}

#[derive(Debug, Deserialize)]
struct CombinedResponse {
    inconsistency_indices: Option<InconsistencyIndices>,
    rankings: Option<serde_json::Map<String, serde_json::Value>>,
    matrices_with_labels: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct WireLabeledMatrix {
    values: serde_json::Map<String, serde_json::Value>,
}
