use thiserror::Error;

/// Failures of the generative backend call itself.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend configuration error: {0}")]
    Config(String),

    #[error("backend network error: {0}")]
    Network(String),

    #[error("backend api error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("backend response decode error: {0}")]
    Decode(String),
}

/// Failures of a summarization attempt: either the backend call failed, or
/// it answered with something the response contract cannot split into a
/// headline and a summary.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
