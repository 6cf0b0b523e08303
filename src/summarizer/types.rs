use serde::{Deserialize, Serialize};

/// Final output of a pipeline run. Ownership moves to the caller; nothing
/// here is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub headline: String,
    pub summary: String,
    /// Language the source text was detected as. The summary is generated
    /// in this language; the summarizer never switches it silently.
    pub language: String,
}
