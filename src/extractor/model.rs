use regex::Regex;
use std::sync::LazyLock;

/// Extracted article text plus the language it was detected as. Held only
/// for the duration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub text: String,
    /// ISO 639-1 code, or `"unknown"` when detection had no clear signal.
    pub language: String,
}

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace (spaces, tabs, newlines) to a single
/// space and trim the ends. Article text is a flat string; paragraph
/// structure is not preserved.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").to_string()
}
