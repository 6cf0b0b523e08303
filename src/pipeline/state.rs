use crate::error::PipelineError;
use crate::extractor::ExtractedContent;
use crate::fetcher::PageResponse;
use crate::pipeline::ExtractionRequest;
use crate::sources::SourceDefinition;
use crate::summarizer::SummaryResult;

/// Explicit state of one pipeline run. Each state carries exactly the data
/// the next transition needs; there is no shared run context.
#[derive(Debug)]
pub enum PipelineState {
    Idle(ExtractionRequest),
    Fetching(ExtractionRequest),
    Extracting {
        source: SourceDefinition,
        page: PageResponse,
    },
    DetectingLanguage {
        text: String,
    },
    Summarizing {
        content: ExtractedContent,
    },
    Done(SummaryResult),
    Failed(PipelineError),
}

impl PipelineState {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle(_) => "idle",
            Self::Fetching(_) => "fetching",
            Self::Extracting { .. } => "extracting",
            Self::DetectingLanguage { .. } => "detecting_language",
            Self::Summarizing { .. } => "summarizing",
            Self::Done(_) => "done",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Failed(_))
    }
}
