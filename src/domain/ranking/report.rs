//! Accumulated ranking report.
//!
//! The orchestrator builds one report per run: method sections arrive
//! in invocation order, inconsistency indices and labeled aggregated
//! matrices are merged in afterwards. Rendering never mutates the
//! report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One alternative and its score within a method's ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
}

impl RankedAlternative {
    /// Creates a new ranked alternative.
    pub fn new(alternative: impl Into<String>, score: f64) -> Self {
        Self {
            alternative: alternative.into(),
            score,
        }
    }
}

/// One method's ordered ranking, labeled for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSection {
    pub method: String,
    pub entries: Vec<RankedAlternative>,
}

impl MethodSection {
    /// Creates a new method section.
    pub fn new(method: impl Into<String>, entries: Vec<RankedAlternative>) -> Self {
        Self {
            method: method.into(),
            entries,
        }
    }
}

/// An aggregated matrix with its alternative labels, as returned by
/// the combined ranking endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    /// Alternative labels, in row/column order.
    pub labels: Vec<String>,
    /// Numeric rows aligned with `labels`.
    pub rows: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    /// Creates a new labeled matrix.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { labels, rows }
    }
}

/// The labeled matrices aggregated under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionMatrices {
    pub criterion: String,
    pub matrices: Vec<LabeledMatrix>,
}

impl CriterionMatrices {
    /// Creates a new criterion matrix group.
    pub fn new(criterion: impl Into<String>, matrices: Vec<LabeledMatrix>) -> Self {
        Self {
            criterion: criterion.into(),
            matrices,
        }
    }
}

/// Per-expert, per-criterion inconsistency indices.
pub type InconsistencyIndices = BTreeMap<String, BTreeMap<String, f64>>;

/// The accumulated result of one ranking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    method_sections: Vec<MethodSection>,
    inconsistency_indices: InconsistencyIndices,
    criterion_matrices: Vec<CriterionMatrices>,
    completed_at: Option<DateTime<Utc>>,
}

impl RankingReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one method's ranking section in arrival order.
    pub fn push_method_section(&mut self, section: MethodSection) {
        self.method_sections.push(section);
    }

    /// Merges the inconsistency indices into the report.
    pub fn set_inconsistency_indices(&mut self, indices: InconsistencyIndices) {
        self.inconsistency_indices = indices;
    }

    /// Merges the labeled aggregated matrices into the report.
    pub fn set_criterion_matrices(&mut self, matrices: Vec<CriterionMatrices>) {
        self.criterion_matrices = matrices;
    }

    /// Stamps the report as complete.
    pub fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Returns the method sections in arrival order.
    pub fn method_sections(&self) -> &[MethodSection] {
        &self.method_sections
    }

    /// Returns the inconsistency indices grouped by expert.
    pub fn inconsistency_indices(&self) -> &InconsistencyIndices {
        &self.inconsistency_indices
    }

    /// Returns the labeled matrices grouped by criterion.
    pub fn criterion_matrices(&self) -> &[CriterionMatrices] {
        &self.criterion_matrices
    }

    /// Returns when the report run completed, if it has.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns true if no section holds any data.
    pub fn is_empty(&self) -> bool {
        self.method_sections.is_empty()
            && self.inconsistency_indices.is_empty()
            && self.criterion_matrices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_empty() {
        let report = RankingReport::new();
        assert!(report.is_empty());
        assert!(report.completed_at().is_none());
    }

    #[test]
    fn method_sections_keep_arrival_order() {
        let mut report = RankingReport::new();
        report.push_method_section(MethodSection::new("TOPSIS", vec![]));
        report.push_method_section(MethodSection::new("BASIC", vec![]));

        let labels: Vec<_> = report
            .method_sections()
            .iter()
            .map(|s| s.method.as_str())
            .collect();
        assert_eq!(labels, ["TOPSIS", "BASIC"]);
    }

    #[test]
    fn indices_make_report_non_empty() {
        let mut report = RankingReport::new();
        assert!(report.is_empty());

        let mut indices = InconsistencyIndices::new();
        indices
            .entry("Alice".to_string())
            .or_default()
            .insert("Price".to_string(), 0.12);
        report.set_inconsistency_indices(indices);

        assert!(!report.is_empty());
    }

    #[test]
    fn mark_completed_stamps_time() {
        let mut report = RankingReport::new();
        report.mark_completed();
        assert!(report.completed_at().is_some());
    }

    #[test]
    fn report_roundtrips_through_json() {
        let mut report = RankingReport::new();
        report.push_method_section(MethodSection::new(
            "CAM",
            vec![RankedAlternative::new("Car", 0.61)],
        ));
        report.set_criterion_matrices(vec![CriterionMatrices::new(
            "Price",
            vec![LabeledMatrix::new(
                vec!["Car".to_string(), "Bike".to_string()],
                vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]],
            )],
        )]);

        let json = serde_json::to_string(&report).unwrap();
        let parsed: RankingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
