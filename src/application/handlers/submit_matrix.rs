//! SubmitMatrixHandler - Packages and submits one expert's completed
//! matrix for one criterion.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{CriterionName, ExpertName, ValidationError};
use crate::domain::matrix::MatrixEditor;
use crate::ports::{MatrixSubmission, ScoringService, ServiceError};

/// Command to submit the current editor state.
#[derive(Debug, Clone)]
pub struct SubmitMatrixCommand {
    pub expert: ExpertName,
    pub criterion: CriterionName,
    /// Alternative count currently reported by the model service.
    pub expected_alternatives: usize,
}

/// Errors from a submission attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Handler for matrix submissions.
pub struct SubmitMatrixHandler {
    service: Arc<dyn ScoringService>,
}

impl SubmitMatrixHandler {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self { service }
    }

    /// Resolves the editor and submits the matrix.
    ///
    /// Returns the service's confirmation message verbatim. The editor
    /// is only borrowed: its grid stays editable whatever the outcome,
    /// and nothing is sent when validation fails.
    pub async fn handle(
        &self,
        cmd: SubmitMatrixCommand,
        editor: &MatrixEditor,
    ) -> Result<String, SubmitError> {
        // 1. Cross-check against the model service's alternative count
        if editor.dimension() != cmd.expected_alternatives {
            return Err(ValidationError::count_mismatch(
                "alternatives",
                cmd.expected_alternatives,
                editor.dimension(),
            )
            .into());
        }

        // 2. Resolve the grid into the numeric matrix
        let matrix = editor.resolve();

        // 3. Submit; the service owns all accumulated matrices
        let submission = MatrixSubmission::new(cmd.expert, cmd.criterion, matrix);
        let message = self.service.submit_matrix(&submission).await?;

        tracing::debug!("Submission {} accepted", submission.submission_id);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockScoringService;
    use crate::domain::foundation::AlternativeName;
    use crate::domain::scale::ScaleValue;

    fn editor(names: &[&str]) -> MatrixEditor {
        let alternatives = names
            .iter()
            .map(|n| AlternativeName::new(*n).unwrap())
            .collect();
        MatrixEditor::build(alternatives, names.len()).unwrap()
    }

    fn command(expected: usize) -> SubmitMatrixCommand {
        SubmitMatrixCommand {
            expert: ExpertName::new("Alice").unwrap(),
            criterion: CriterionName::new("Price").unwrap(),
            expected_alternatives: expected,
        }
    }

    #[tokio::test]
    async fn submits_resolved_matrix_with_identity() {
        let mock = Arc::new(MockScoringService::new());
        let handler = SubmitMatrixHandler::new(mock.clone());

        let mut editor = editor(&["Car", "Bike"]);
        editor.set_cell(0, 1, ScaleValue::Three).unwrap();

        let message = handler.handle(command(2), &editor).await.unwrap();
        assert_eq!(message, "Expert matrix added successfully");

        let submissions = mock.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].expert.as_str(), "Alice");
        assert_eq!(submissions[0].criterion.as_str(), "Price");
        assert_eq!(submissions[0].matrix.get(0, 1), Some(3.0));
        assert_eq!(submissions[0].matrix.get(1, 0), Some(1.0 / 3.0));
    }

    #[tokio::test]
    async fn count_mismatch_is_rejected_before_any_network_call() {
        let mock = Arc::new(MockScoringService::new());
        let handler = SubmitMatrixHandler::new(mock.clone());

        let editor = editor(&["Car", "Bike", "Train"]);
        let result = handler.handle(command(4), &editor).await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(ValidationError::CountMismatch { .. }))
        ));
        assert!(mock.calls().is_empty());
        assert!(mock.submissions().is_empty());
    }

    #[tokio::test]
    async fn service_rejection_is_surfaced_verbatim() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_submit_failure(ServiceError::rejected("Criterion 'Price' not found.")),
        );
        let handler = SubmitMatrixHandler::new(mock);

        let editor = editor(&["Car", "Bike"]);
        let err = handler.handle(command(2), &editor).await.unwrap_err();
        assert_eq!(err.to_string(), "Criterion 'Price' not found.");
    }

    #[tokio::test]
    async fn editor_remains_editable_after_failed_submission() {
        let mock = Arc::new(
            MockScoringService::new().with_submit_failure(ServiceError::transport("down")),
        );
        let handler = SubmitMatrixHandler::new(mock);

        let mut editor = editor(&["Car", "Bike"]);
        editor.set_cell(0, 1, ScaleValue::Five).unwrap();
        assert!(handler.handle(command(2), &editor).await.is_err());

        editor.set_cell(0, 1, ScaleValue::Seven).unwrap();
        assert_eq!(editor.cell(0, 1).unwrap(), ScaleValue::Seven);
        assert_eq!(editor.cell(1, 0).unwrap(), ScaleValue::OneSeventh);
    }
}
