//! ModelAdminHandler - Thin pass-through for model mutations.
//!
//! Registration and clearing live entirely in the model service; this
//! handler forwards the request and returns the service's message
//! verbatim. Callers re-run the panel bootstrap after a successful
//! mutation to pick up the new state.

use std::sync::Arc;

use crate::domain::foundation::{AlternativeName, CriterionName, ExpertName};
use crate::ports::{ScoringService, ServiceError};

/// Handler for model administration operations.
pub struct ModelAdminHandler {
    service: Arc<dyn ScoringService>,
}

impl ModelAdminHandler {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self { service }
    }

    /// Registers a new alternative.
    pub async fn add_alternative(&self, name: &AlternativeName) -> Result<String, ServiceError> {
        self.service.add_alternative(name).await
    }

    /// Registers a new criterion.
    pub async fn add_criterion(&self, name: &CriterionName) -> Result<String, ServiceError> {
        self.service.add_criterion(name).await
    }

    /// Registers a new expert.
    pub async fn add_expert(&self, name: &ExpertName) -> Result<String, ServiceError> {
        self.service.add_expert(name).await
    }

    /// Clears the whole decision model.
    pub async fn clear_model(&self) -> Result<String, ServiceError> {
        self.service.clear_model().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockScoringService;

    #[tokio::test]
    async fn forwards_additions_and_returns_messages_verbatim() {
        let mock = Arc::new(
            MockScoringService::new().with_admin_message("Alternative added successfully"),
        );
        let handler = ModelAdminHandler::new(mock.clone());

        let message = handler
            .add_alternative(&AlternativeName::new("Car").unwrap())
            .await
            .unwrap();
        assert_eq!(message, "Alternative added successfully");
        assert_eq!(mock.calls(), ["add_alternative:Car"]);
    }

    #[tokio::test]
    async fn surfaces_rejections_verbatim() {
        let mock = Arc::new(
            MockScoringService::new()
                .with_admin_failure(ServiceError::rejected("No expert name provided")),
        );
        let handler = ModelAdminHandler::new(mock);

        let err = handler
            .add_expert(&ExpertName::new("Alice").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No expert name provided");
    }
}
