//! Mock Scoring Service for testing.
//!
//! Configurable implementation of the ScoringService port so handler
//! and orchestration tests run without a live service.
//!
//! # Features
//!
//! - Per-operation pre-configured outcomes
//! - Error injection for resilience testing
//! - Call and submission tracking for verification

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{AlternativeName, CriterionName, ExpertName};
use crate::domain::ranking::{InconsistencyIndices, RankedAlternative, RankingMethod, RankingReport};
use crate::ports::{AlternativeSet, MatrixSubmission, ScoringService, ServiceError};

type Outcome<T> = Result<T, ServiceError>;

/// Mock scoring service with configurable outcomes per operation.
pub struct MockScoringService {
    experts: Mutex<Outcome<Vec<String>>>,
    criteria: Mutex<Outcome<Vec<String>>>,
    alternatives: Mutex<Outcome<AlternativeSet>>,
    rankings: Mutex<HashMap<RankingMethod, Outcome<Vec<RankedAlternative>>>>,
    indices: Mutex<Outcome<InconsistencyIndices>>,
    combined: Mutex<Outcome<RankingReport>>,
    submit: Mutex<Outcome<String>>,
    admin_message: Mutex<Outcome<String>>,
    download: Mutex<Outcome<Vec<u8>>>,
    calls: Mutex<Vec<String>>,
    submissions: Mutex<Vec<MatrixSubmission>>,
}

impl Default for MockScoringService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockScoringService {
    /// Creates a mock where every operation succeeds with empty data.
    pub fn new() -> Self {
        Self {
            experts: Mutex::new(Ok(Vec::new())),
            criteria: Mutex::new(Ok(Vec::new())),
            alternatives: Mutex::new(Ok(AlternativeSet::empty())),
            rankings: Mutex::new(HashMap::new()),
            indices: Mutex::new(Ok(InconsistencyIndices::new())),
            combined: Mutex::new(Ok(RankingReport::new())),
            submit: Mutex::new(Ok("Expert matrix added successfully".to_string())),
            admin_message: Mutex::new(Ok("ok".to_string())),
            download: Mutex::new(Ok(Vec::new())),
            calls: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Configures the expert list.
    pub fn with_experts(self, experts: Vec<&str>) -> Self {
        *self.experts.lock().unwrap() = Ok(experts.into_iter().map(String::from).collect());
        self
    }

    /// Configures the expert list to fail.
    pub fn with_experts_failure(self, err: ServiceError) -> Self {
        *self.experts.lock().unwrap() = Err(err);
        self
    }

    /// Configures the criterion list.
    pub fn with_criteria(self, criteria: Vec<&str>) -> Self {
        *self.criteria.lock().unwrap() = Ok(criteria.into_iter().map(String::from).collect());
        self
    }

    /// Configures the criterion list to fail.
    pub fn with_criteria_failure(self, err: ServiceError) -> Self {
        *self.criteria.lock().unwrap() = Err(err);
        self
    }

    /// Configures the alternative set.
    pub fn with_alternative_set(self, count: usize, labels: Vec<&str>) -> Self {
        *self.alternatives.lock().unwrap() = Ok(AlternativeSet::new(
            count,
            labels.into_iter().map(String::from).collect(),
        ));
        self
    }

    /// Configures the alternative set to fail.
    pub fn with_alternative_set_failure(self, err: ServiceError) -> Self {
        *self.alternatives.lock().unwrap() = Err(err);
        self
    }

    /// Configures one method's ranking.
    pub fn with_ranking(self, method: RankingMethod, entries: Vec<RankedAlternative>) -> Self {
        self.rankings.lock().unwrap().insert(method, Ok(entries));
        self
    }

    /// Configures one method to fail.
    pub fn with_ranking_failure(self, method: RankingMethod, err: ServiceError) -> Self {
        self.rankings.lock().unwrap().insert(method, Err(err));
        self
    }

    /// Configures the inconsistency indices.
    pub fn with_indices(self, indices: InconsistencyIndices) -> Self {
        *self.indices.lock().unwrap() = Ok(indices);
        self
    }

    /// Configures the inconsistency index fetch to fail.
    pub fn with_indices_failure(self, err: ServiceError) -> Self {
        *self.indices.lock().unwrap() = Err(err);
        self
    }

    /// Configures the combined report.
    pub fn with_combined_report(self, report: RankingReport) -> Self {
        *self.combined.lock().unwrap() = Ok(report);
        self
    }

    /// Configures the combined report to fail.
    pub fn with_combined_failure(self, err: ServiceError) -> Self {
        *self.combined.lock().unwrap() = Err(err);
        self
    }

    /// Configures the submission confirmation message.
    pub fn with_submit_message(self, message: impl Into<String>) -> Self {
        *self.submit.lock().unwrap() = Ok(message.into());
        self
    }

    /// Configures submissions to be rejected.
    pub fn with_submit_failure(self, err: ServiceError) -> Self {
        *self.submit.lock().unwrap() = Err(err);
        self
    }

    /// Configures the confirmation message for model administration.
    pub fn with_admin_message(self, message: impl Into<String>) -> Self {
        *self.admin_message.lock().unwrap() = Ok(message.into());
        self
    }

    /// Configures model administration to fail.
    pub fn with_admin_failure(self, err: ServiceError) -> Self {
        *self.admin_message.lock().unwrap() = Err(err);
        self
    }

    /// Configures the model file download.
    pub fn with_download_bytes(self, bytes: Vec<u8>) -> Self {
        *self.download.lock().unwrap() = Ok(bytes);
        self
    }

    /// Returns the operations invoked, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns every matrix submission received.
    pub fn submissions(&self) -> Vec<MatrixSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl ScoringService for MockScoringService {
    async fn list_experts(&self) -> Result<Vec<String>, ServiceError> {
        self.record("list_experts");
        self.experts.lock().unwrap().clone()
    }

    async fn list_criteria(&self) -> Result<Vec<String>, ServiceError> {
        self.record("list_criteria");
        self.criteria.lock().unwrap().clone()
    }

    async fn alternative_set(&self) -> Result<AlternativeSet, ServiceError> {
        self.record("alternative_set");
        self.alternatives.lock().unwrap().clone()
    }

    async fn add_alternative(&self, name: &AlternativeName) -> Result<String, ServiceError> {
        self.record(format!("add_alternative:{}", name));
        self.admin_message.lock().unwrap().clone()
    }

    async fn add_criterion(&self, name: &CriterionName) -> Result<String, ServiceError> {
        self.record(format!("add_criterion:{}", name));
        self.admin_message.lock().unwrap().clone()
    }

    async fn add_expert(&self, name: &ExpertName) -> Result<String, ServiceError> {
        self.record(format!("add_expert:{}", name));
        self.admin_message.lock().unwrap().clone()
    }

    async fn submit_matrix(&self, submission: &MatrixSubmission) -> Result<String, ServiceError> {
        self.record("submit_matrix");
        self.submissions.lock().unwrap().push(submission.clone());
        self.submit.lock().unwrap().clone()
    }

    async fn rank(&self, method: RankingMethod) -> Result<Vec<RankedAlternative>, ServiceError> {
        self.record(format!("rank:{}", method.label()));
        self.rankings
            .lock()
            .unwrap()
            .get(&method)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn inconsistency_indices(&self) -> Result<InconsistencyIndices, ServiceError> {
        self.record("inconsistency_indices");
        self.indices.lock().unwrap().clone()
    }

    async fn combined_report(&self) -> Result<RankingReport, ServiceError> {
        self.record("combined_report");
        self.combined.lock().unwrap().clone()
    }

    async fn upload_model(&self, filename: &str, _bytes: Vec<u8>) -> Result<String, ServiceError> {
        self.record(format!("upload_model:{}", filename));
        self.admin_message.lock().unwrap().clone()
    }

    async fn download_model(&self, filename: &str) -> Result<Vec<u8>, ServiceError> {
        self.record(format!("download_model:{}", filename));
        self.download.lock().unwrap().clone()
    }

    async fn clear_model(&self) -> Result<String, ServiceError> {
        self.record("clear_model");
        self.admin_message.lock().unwrap().clone()
    }
}
