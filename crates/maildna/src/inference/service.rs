use async_trait::async_trait;
use thiserror::Error;

/// Errors at the Inference Service boundary. Timeouts surface as connection
/// errors; callers treat every variant as an ordinary stage-local failure.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference service connection failed: {0}")]
    Connection(String),

    #[error("Inference service returned an error: {0}")]
    Api(String),

    #[error("Failed to parse inference response: {0}")]
    Parse(String),
}

/// A single image attached to a classification request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Narrow contract over the language model: given a prompt (optionally with
/// one attached image), return text or fail. Injected into the classifier
/// stages at construction so tests can substitute a deterministic stub.
#[async_trait]
pub trait InferenceService: Send + Sync {
    async fn classify(
        &self,
        prompt: &str,
        image: Option<&ImagePayload>,
    ) -> Result<String, InferenceError>;
}
