//! Summarizer: prompt construction, the generative-backend seam, and
//! deterministic response parsing.
//!
//! The backend sits behind [`GenerativeBackend`] so the pipeline can be
//! driven against a stub; [`GeminiClient`] is the production
//! implementation. Every summarization is single-shot: the summarizer
//! builds one prompt, makes one call and parses it, and surfaces failures
//! typed rather than retrying.

pub mod backend;
pub mod errors;
pub mod gemini;
pub mod parse;
pub mod prompt;
pub mod types;

pub use backend::GenerativeBackend;
pub use errors::{BackendError, SummarizerError};
pub use gemini::GeminiClient;
pub use prompt::{GenerationParams, HEADLINE_MARKER, build_prompt};
pub use types::SummaryResult;

use parse::parse_response;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Single-shot article summarizer bound to one generative backend.
pub struct Summarizer {
    backend: Arc<dyn GenerativeBackend>,
    word_bounds: (usize, usize),
}

impl Summarizer {
    pub fn new(backend: Arc<dyn GenerativeBackend>, word_bounds: (usize, usize)) -> Self {
        Self {
            backend,
            word_bounds,
        }
    }

    /// Produce a headline and summary for `text`, in `language`.
    ///
    /// The returned result always carries `language` unchanged, so callers
    /// can rely on summary language matching detection.
    #[instrument(skip_all, fields(language = %language, chars = text.len()))]
    pub async fn summarize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SummaryResult, SummarizerError> {
        let prompt = build_prompt(text, language, self.word_bounds);
        let raw = self.backend.generate(&prompt).await?;
        let (headline, summary) = parse_response(&raw)?;

        let words = summary.split_whitespace().count();
        let (min_words, max_words) = self.word_bounds;
        if words < min_words || words > max_words {
            // The bounds are advisory; the model can drift.
            warn!(
                words,
                min_words, max_words, "summary length outside requested bounds"
            );
        }

        Ok(SummaryResult {
            headline,
            summary,
            language: language.to_string(),
        })
    }
}
