//! Newsbrief: a news-article summarization pipeline.
//!
//! Fetches an article page, extracts the body text with source-specific
//! selectors, detects its language, and asks a generative backend for a
//! headline plus summary in the same language and tone.
//!
//! The crate is organized leaf-first:
//! - [`sources`]: static registry of news sources and their selectors
//! - [`fetcher`]: bounded HTTP GET and charset decoding
//! - [`extractor`]: selector-driven text extraction, language detection
//! - [`summarizer`]: prompt construction, backend seam, response parsing
//! - [`pipeline`]: the state machine tying the steps together

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod sources;
pub mod summarizer;

pub use error::PipelineError;
pub use pipeline::{ExtractionRequest, Pipeline};
pub use summarizer::SummaryResult;
