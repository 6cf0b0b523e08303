use crate::fetcher::FetchError;
use crate::sources::SourceError;
use crate::summarizer::{BackendError, SummarizerError};
use thiserror::Error;

/// Terminal failure of one pipeline run.
///
/// Every component failure maps to exactly one of these kinds; nothing is
/// swallowed or retried inside the pipeline, and a failed run never exposes
/// partial results.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid source: {0}")]
    InvalidSource(#[from] SourceError),

    #[error("fetch failed: {0}")]
    Fetch(#[source] FetchError),

    #[error("no content matched the selector")]
    NoContent,

    #[error("unusable backend response: {0}")]
    MalformedResponse(String),

    #[error("backend call failed: {0}")]
    Backend(#[source] BackendError),

    #[error("run cancelled")]
    Cancelled,
}

impl PipelineError {
    /// Whether a fresh run could plausibly succeed. Purely a hint for the
    /// caller; the pipeline itself never retries.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::InvalidUrl(_) => false,
            Self::InvalidSource(_) => false,
            Self::Fetch(e) => e.should_retry(),
            Self::NoContent => false,
            Self::MalformedResponse(_) => true,
            Self::Backend(e) => match e {
                BackendError::Config(_) => false,
                BackendError::Network(_) => true,
                BackendError::Api { status, .. } => {
                    status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
                }
                BackendError::Decode(_) => false,
            },
            Self::Cancelled => false,
        }
    }
}

impl From<FetchError> for PipelineError {
    fn from(err: FetchError) -> Self {
        // URL problems are caller mistakes, not transport failures; they
        // get their own kind.
        match err {
            FetchError::InvalidUrl(e) => Self::InvalidUrl(e.to_string()),
            FetchError::UnsupportedScheme(scheme) => {
                Self::InvalidUrl(format!("unsupported scheme '{scheme}'"))
            }
            other => Self::Fetch(other),
        }
    }
}

impl From<SummarizerError> for PipelineError {
    fn from(err: SummarizerError) -> Self {
        match err {
            SummarizerError::Backend(e) => Self::Backend(e),
            SummarizerError::MalformedResponse(reason) => Self::MalformedResponse(reason),
        }
    }
}
