//! RankingOrchestrator - Runs every ranking method and merges the
//! results into one report.
//!
//! The sequential flow issues one request at a time: the report
//! accumulator is owned by this task for the whole run, so no two
//! in-flight requests can ever write it. The inconsistency-index fetch
//! happens exactly once, only after every method has reached a
//! terminal outcome.

use std::sync::Arc;

use crate::domain::ranking::{MethodSection, RankingMethod, RankingReport};
use crate::ports::{ScoringService, ServiceError};

/// Orchestrates the multi-method ranking flow.
pub struct RankingOrchestrator {
    service: Arc<dyn ScoringService>,
}

impl RankingOrchestrator {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self { service }
    }

    /// Invokes each ranking method in the fixed order, then fetches
    /// the inconsistency indices.
    ///
    /// A method that fails, or that returns no ranking, contributes no
    /// section; its absence is the only signal the caller sees. The
    /// run itself always produces a report.
    pub async fn run_sequential(&self) -> RankingReport {
        let mut report = RankingReport::new();

        for method in RankingMethod::INVOCATION_ORDER {
            match self.service.rank(method).await {
                Ok(entries) if !entries.is_empty() => {
                    report.push_method_section(MethodSection::new(method.label(), entries));
                }
                Ok(_) => {
                    tracing::debug!("Method {} returned no ranking, skipping", method);
                }
                Err(err) => {
                    tracing::warn!("Method {} failed, skipping: {}", method, err);
                }
            }
        }

        match self.service.inconsistency_indices().await {
            Ok(indices) => report.set_inconsistency_indices(indices),
            Err(err) => {
                tracing::warn!("Failed to fetch inconsistency indices: {}", err);
            }
        }

        report.mark_completed();
        report
    }

    /// Fetches rankings, indices, and labeled matrices in one request.
    ///
    /// Unlike the sequential flow, any failure here is fatal: no
    /// partial report is produced.
    pub async fn run_combined(&self) -> Result<RankingReport, ServiceError> {
        let mut report = self.service.combined_report().await?;
        report.mark_completed();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockScoringService;
    use crate::domain::ranking::{InconsistencyIndices, RankedAlternative};

    fn entries(alternative: &str, score: f64) -> Vec<RankedAlternative> {
        vec![RankedAlternative::new(alternative, score)]
    }

    #[tokio::test]
    async fn all_methods_succeed_in_invocation_order() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_ranking(RankingMethod::Topsis, entries("Car", 0.7))
                .with_ranking(RankingMethod::ConsistencyAdjusted, entries("Car", 0.6))
                .with_ranking(RankingMethod::Basic, entries("Car", 0.5)),
        );

        let report = RankingOrchestrator::new(mock.clone()).run_sequential().await;

        let methods: Vec<_> = report
            .method_sections()
            .iter()
            .map(|s| s.method.as_str())
            .collect();
        assert_eq!(methods, ["TOPSIS", "CAM", "BASIC"]);
        assert!(report.completed_at().is_some());

        assert_eq!(
            mock.calls(),
            ["rank:TOPSIS", "rank:CAM", "rank:BASIC", "inconsistency_indices"]
        );
    }

    #[tokio::test]
    async fn failing_method_is_skipped_and_siblings_survive() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_ranking(RankingMethod::Topsis, entries("Car", 0.7))
                .with_ranking_failure(
                    RankingMethod::ConsistencyAdjusted,
                    ServiceError::transport("down"),
                )
                .with_ranking(RankingMethod::Basic, entries("Bike", 0.4)),
        );

        let report = RankingOrchestrator::new(mock.clone()).run_sequential().await;

        let methods: Vec<_> = report
            .method_sections()
            .iter()
            .map(|s| s.method.as_str())
            .collect();
        assert_eq!(methods, ["TOPSIS", "BASIC"]);

        // All three attempts happen, and the index fetch still runs
        // exactly once, last.
        let calls = mock.calls();
        assert_eq!(
            calls,
            ["rank:TOPSIS", "rank:CAM", "rank:BASIC", "inconsistency_indices"]
        );
    }

    #[tokio::test]
    async fn empty_ranking_contributes_no_section() {
        let mock = Arc::new(
            MockScoringService::new().with_ranking(RankingMethod::Topsis, Vec::new()),
        );

        let report = RankingOrchestrator::new(mock).run_sequential().await;
        assert!(report.method_sections().is_empty());
    }

    #[tokio::test]
    async fn index_fetch_failure_leaves_section_absent() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_ranking(RankingMethod::Basic, entries("Car", 0.5))
                .with_indices_failure(ServiceError::transport("down")),
        );

        let report = RankingOrchestrator::new(mock).run_sequential().await;
        assert_eq!(report.method_sections().len(), 1);
        assert!(report.inconsistency_indices().is_empty());
    }

    #[tokio::test]
    async fn indices_are_merged_into_the_report() {
        let mut indices = InconsistencyIndices::new();
        indices
            .entry("Alice".to_string())
            .or_default()
            .insert("Price".to_string(), 0.09);

        let mock = Arc::new(MockScoringService::new().with_indices(indices.clone()));

        let report = RankingOrchestrator::new(mock).run_sequential().await;
        assert_eq!(report.inconsistency_indices(), &indices);
    }

    #[tokio::test]
    async fn combined_run_returns_the_merged_report() {
        let mut combined = RankingReport::new();
        combined.push_method_section(MethodSection::new("TOPSIS", entries("Car", 0.7)));

        let mock = Arc::new(MockScoringService::new().with_combined_report(combined));

        let report = RankingOrchestrator::new(mock.clone())
            .run_combined()
            .await
            .unwrap();
        assert_eq!(report.method_sections()[0].method, "TOPSIS");
        assert!(report.completed_at().is_some());
        assert_eq!(mock.calls(), ["combined_report"]);
    }

    #[tokio::test]
    async fn combined_failure_is_fatal_with_no_partial_report() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_combined_failure(ServiceError::transport("down")),
        );

        let result = RankingOrchestrator::new(mock).run_combined().await;
        assert!(result.is_err());
    }
}
