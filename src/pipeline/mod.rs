//! Pipeline orchestrator.
//!
//! One run walks the sequence fetch -> extract -> detect language ->
//! summarize as a small state machine: an explicit [`PipelineState`] value
//! plus a single transition function. Any component failure drops the run
//! into `Failed` with a typed [`PipelineError`]; partial results are
//! discarded, never exposed. Runs share no mutable state, so any number of
//! them can execute concurrently.

pub mod state;

pub use state::PipelineState;

use crate::config::Config;
use crate::error::PipelineError;
use crate::extractor::{self, ExtractedContent};
use crate::fetcher;
use crate::sources::{self, SourceDefinition};
use crate::summarizer::{GenerativeBackend, Summarizer, SummaryResult};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Below this many words the extraction almost certainly missed the
/// article body; the run proceeds but the shortfall is logged.
const SHORT_CONTENT_WORDS: usize = 50;

/// One article summarization request: where to fetch and how to find the
/// article body. Consumed by a single run, never persisted.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub url: String,
    pub source: SourceDefinition,
}

/// Orchestrates pipeline runs against one generative backend.
pub struct Pipeline {
    summarizer: Summarizer,
    fetch_timeout: Duration,
    cancel: CancellationToken,
}

impl Pipeline {
    pub fn new(backend: Arc<dyn GenerativeBackend>, config: &Config) -> Self {
        Self {
            summarizer: Summarizer::new(backend, config.word_bounds()),
            fetch_timeout: config.fetch_timeout(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token observed before each blocking step. Cancel it to abandon
    /// in-flight runs; a cancelled run must be restarted from the top.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The single inbound operation: resolve the source, then run the
    /// machine from `Idle` to a terminal state.
    pub async fn summarize_article(
        &self,
        url: &str,
        source_name: &str,
        custom_selector: Option<&str>,
    ) -> Result<SummaryResult, PipelineError> {
        let source = sources::resolve(source_name, custom_selector)?;
        self.run(ExtractionRequest {
            url: url.to_string(),
            source,
        })
        .await
    }

    /// Run the machine for an already-resolved request.
    pub async fn run(&self, request: ExtractionRequest) -> Result<SummaryResult, PipelineError> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "pipeline_run",
            id = %run_id,
            url = %request.url,
            source = %request.source.name,
        );
        self.drive(PipelineState::Idle(request)).instrument(span).await
    }

    /// Summarize caller-supplied text, skipping fetch and extraction. The
    /// text still goes through whitespace collapsing and language
    /// detection, so pasted articles behave like fetched ones.
    pub async fn summarize_text(&self, text: &str) -> Result<SummaryResult, PipelineError> {
        let text = extractor::collapse_whitespace(text);
        if text.is_empty() {
            return Err(PipelineError::NoContent);
        }
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline_run", id = %run_id, source = "text");
        self.drive(PipelineState::DetectingLanguage { text })
            .instrument(span)
            .await
    }

    async fn drive(&self, mut state: PipelineState) -> Result<SummaryResult, PipelineError> {
        loop {
            state = self.advance(state).await;
            match state {
                PipelineState::Done(result) => {
                    info!(language = %result.language, "pipeline complete");
                    return Ok(result);
                }
                PipelineState::Failed(err) => {
                    warn!(error = %err, "pipeline failed");
                    return Err(err);
                }
                ref next => debug!(state = next.name(), "state transition"),
            }
        }
    }

    /// The single transition function. Terminal states map to themselves.
    async fn advance(&self, state: PipelineState) -> PipelineState {
        match state {
            PipelineState::Idle(request) => PipelineState::Fetching(request),

            PipelineState::Fetching(request) => {
                if self.cancel.is_cancelled() {
                    return PipelineState::Failed(PipelineError::Cancelled);
                }
                match fetcher::fetch(&request.url, self.fetch_timeout).await {
                    Ok(page) => PipelineState::Extracting {
                        source: request.source,
                        page,
                    },
                    Err(e) => PipelineState::Failed(e.into()),
                }
            }

            PipelineState::Extracting { source, page } => {
                let text = extractor::extract(&page.body_utf8, &source);
                if text.is_empty() {
                    PipelineState::Failed(PipelineError::NoContent)
                } else {
                    let words = text.split_whitespace().count();
                    if words < SHORT_CONTENT_WORDS {
                        // Usually a selector drifting after a site redesign.
                        warn!(words, "extracted content is unusually short");
                    }
                    debug!(chars = text.len(), "content extracted");
                    PipelineState::DetectingLanguage { text }
                }
            }

            PipelineState::DetectingLanguage { text } => {
                let language = extractor::detect_language(&text);
                debug!(%language, "language detected");
                PipelineState::Summarizing {
                    content: ExtractedContent { text, language },
                }
            }

            PipelineState::Summarizing { content } => {
                if self.cancel.is_cancelled() {
                    return PipelineState::Failed(PipelineError::Cancelled);
                }
                match self
                    .summarizer
                    .summarize(&content.text, &content.language)
                    .await
                {
                    Ok(result) => PipelineState::Done(result),
                    Err(e) => PipelineState::Failed(e.into()),
                }
            }

            terminal => terminal,
        }
    }
}
