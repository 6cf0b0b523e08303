use crate::summarizer::errors::BackendError;
use async_trait::async_trait;

/// A generative model that turns a prompt into free-form text.
///
/// Implementations are single-shot: one request per call, no internal
/// retries. Whether to retry a failed generation is the caller's decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}
