use crate::extractor::UNKNOWN_LANGUAGE;

/// Line prefix the backend is instructed to put in front of the headline.
/// Response parsing keys on this exact marker.
pub const HEADLINE_MARKER: &str = "HEADLINE:";

/// Generation parameters sent with every backend request. These are fixed
/// configuration constants, not user-tunable at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Lower values make the summary more deterministic.
    pub temperature: f32,
    pub top_p: f32,
    /// Upper bound on generated length, in model tokens.
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 0.9,
            max_output_tokens: 1024,
        }
    }
}

/// Build the summarization prompt: journalist persona, explicit target
/// language (or "match the content" when detection came up empty), tone
/// preservation, and the two-field response contract.
pub fn build_prompt(text: &str, language: &str, word_bounds: (usize, usize)) -> String {
    let (min_words, max_words) = word_bounds;
    let language_clause = if language == UNKNOWN_LANGUAGE {
        "in the same language as the content".to_string()
    } else {
        format!("in '{language}'")
    };
    format!(
        "You are a journalist summarizing news content {language_clause}. \
         Generate a headline and a summary within {min_words} to {max_words} words, \
         preserving the language and tone of the original.\n\
         Reply in exactly this format, with no extra commentary:\n\
         {HEADLINE_MARKER} <the headline>\n\
         <the summary>\n\n\
         Content:\n{text}"
    )
}
