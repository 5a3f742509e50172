//! ModelTransferHandler - Import and export of the saved decision
//! model.

use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::ports::{ScoringService, ServiceError};

/// Default model filename, used when a path has no usable name.
const DEFAULT_MODEL_FILENAME: &str = "ahp_model.json";

/// Errors from model file transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Handler for uploading and downloading model files.
pub struct ModelTransferHandler {
    service: Arc<dyn ScoringService>,
}

impl ModelTransferHandler {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self { service }
    }

    /// Uploads a saved model file to the service.
    ///
    /// Returns the service's confirmation message verbatim. Callers
    /// re-run the panel bootstrap afterwards, since a successful
    /// upload replaces the whole model.
    pub async fn upload(&self, path: &Path) -> Result<String, TransferError> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_MODEL_FILENAME);

        tracing::debug!("Uploading model file '{}' ({} bytes)", filename, bytes.len());
        Ok(self.service.upload_model(filename, bytes).await?)
    }

    /// Downloads the current model into a local file.
    pub async fn download(&self, filename: &str, dest: &Path) -> Result<(), TransferError> {
        let bytes = self.service.download_model(filename).await?;
        tokio::fs::write(dest, bytes).await?;
        tracing::debug!("Saved model file to {}", dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockScoringService;

    #[tokio::test]
    async fn upload_reads_the_file_and_returns_the_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved_model.json");
        tokio::fs::write(&path, b"{\"alternatives\": []}")
            .await
            .unwrap();

        let mock = Arc::new(
            MockScoringService::new().with_admin_message("Model loaded successfully"),
        );
        let handler = ModelTransferHandler::new(mock.clone());

        let message = handler.upload(&path).await.unwrap();
        assert_eq!(message, "Model loaded successfully");
        assert_eq!(mock.calls(), ["upload_model:saved_model.json"]);
    }

    #[tokio::test]
    async fn upload_of_missing_file_fails_without_a_service_call() {
        let mock = Arc::new(MockScoringService::new());
        let handler = ModelTransferHandler::new(mock.clone());

        let result = handler.upload(Path::new("/nonexistent/model.json")).await;
        assert!(matches!(result, Err(TransferError::Io(_))));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn download_writes_the_received_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("downloaded.json");

        let mock = Arc::new(
            MockScoringService::new().with_download_bytes(b"{\"criteria\": []}".to_vec()),
        );
        let handler = ModelTransferHandler::new(mock.clone());

        handler.download("ahp_model.json", &dest).await.unwrap();
        let written = tokio::fs::read(&dest).await.unwrap();
        assert_eq!(written, b"{\"criteria\": []}");
        assert_eq!(mock.calls(), ["download_model:ahp_model.json"]);
    }
}
