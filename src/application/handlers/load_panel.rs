//! LoadPanelHandler - Explicit initialization routine for the panel
//! context.
//!
//! Fetches the expert list, criterion list, and alternative set in one
//! pass. The entry point invokes it once on startup and again after
//! model mutations, replacing any ambient on-load wiring.

use std::sync::Arc;

use crate::domain::foundation::{AlternativeName, ValidationError};
use crate::domain::matrix::MatrixEditor;
use crate::ports::{AlternativeSet, ScoringService, ServiceError};

/// The panel context needed before any matrix can be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContext {
    /// Registered expert labels; empty when none exist yet.
    pub experts: Vec<String>,
    /// Registered criterion labels; empty when none exist yet.
    pub criteria: Vec<String>,
    /// The current alternative set.
    pub alternatives: AlternativeSet,
}

impl PanelContext {
    /// Builds a fresh matrix editor over the current alternative set.
    ///
    /// Fails when the reported count disagrees with the label list, or
    /// when a label is empty.
    pub fn editor(&self) -> Result<MatrixEditor, ValidationError> {
        let labels = self
            .alternatives
            .labels
            .iter()
            .map(AlternativeName::new)
            .collect::<Result<Vec<_>, _>>()?;
        MatrixEditor::build(labels, self.alternatives.count)
    }
}

/// Handler loading the panel context from the model service.
pub struct LoadPanelHandler {
    service: Arc<dyn ScoringService>,
}

impl LoadPanelHandler {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self { service }
    }

    /// Loads experts, criteria, and the alternative set.
    ///
    /// Missing experts or criteria are not an error (a fresh model has
    /// neither); a failing alternative-set fetch is, since nothing can
    /// be edited without it.
    pub async fn handle(&self) -> Result<PanelContext, ServiceError> {
        let experts = match self.service.list_experts().await {
            Ok(experts) => experts,
            Err(err) => {
                tracing::warn!("Failed to load experts: {}", err);
                Vec::new()
            }
        };

        let criteria = match self.service.list_criteria().await {
            Ok(criteria) => criteria,
            Err(err) => {
                tracing::warn!("Failed to load criteria: {}", err);
                Vec::new()
            }
        };

        let alternatives = self.service.alternative_set().await?;

        Ok(PanelContext {
            experts,
            criteria,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockScoringService;

    #[tokio::test]
    async fn loads_full_panel_context() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_experts(vec!["Alice", "Bob"])
                .with_criteria(vec!["Price", "Comfort"])
                .with_alternative_set(2, vec!["Car", "Bike"]),
        );

        let context = LoadPanelHandler::new(mock.clone()).handle().await.unwrap();
        assert_eq!(context.experts, ["Alice", "Bob"]);
        assert_eq!(context.criteria, ["Price", "Comfort"]);
        assert_eq!(context.alternatives.labels, ["Car", "Bike"]);
    }

    #[tokio::test]
    async fn expert_and_criterion_failures_degrade_to_empty() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_experts_failure(ServiceError::transport("down"))
                .with_criteria_failure(ServiceError::transport("down"))
                .with_alternative_set(1, vec!["Car"]),
        );

        let context = LoadPanelHandler::new(mock).handle().await.unwrap();
        assert!(context.experts.is_empty());
        assert!(context.criteria.is_empty());
        assert_eq!(context.alternatives.count, 1);
    }

    #[tokio::test]
    async fn alternative_set_failure_is_fatal() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_alternative_set_failure(ServiceError::transport("down")),
        );

        let result = LoadPanelHandler::new(mock).handle().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn editor_builds_over_the_alternative_set() {
        let mock = Arc::new(MockScoringService::new().with_alternative_set(
            3,
            vec!["Car", "Bike", "Train"],
        ));

        let context = LoadPanelHandler::new(mock).handle().await.unwrap();
        let editor = context.editor().unwrap();
        assert_eq!(editor.dimension(), 3);
        assert_eq!(editor.alternatives()[2].as_str(), "Train");
    }

    #[tokio::test]
    async fn editor_rejects_inconsistent_alternative_set() {
        let mock = Arc::new(
            MockScoringService::new().with_alternative_set(4, vec!["Car", "Bike", "Train"]),
        );

        let context = LoadPanelHandler::new(mock).handle().await.unwrap();
        assert_eq!(
            context.editor().unwrap_err(),
            ValidationError::count_mismatch("alternatives", 4, 3)
        );
    }
}
