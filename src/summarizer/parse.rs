use crate::summarizer::errors::SummarizerError;
use crate::summarizer::prompt::HEADLINE_MARKER;

/// Deterministically split a raw backend reply into (headline, summary).
///
/// The contract is the one `build_prompt` asks for: the first line carries
/// the [`HEADLINE_MARKER`], everything after it is the summary body. Any
/// reply that cannot be split that way is malformed; the caller never sees
/// partial output.
pub fn parse_response(raw: &str) -> Result<(String, String), SummarizerError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(SummarizerError::MalformedResponse(
            "empty response".to_string(),
        ));
    }

    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let Some(headline) = first.strip_prefix(HEADLINE_MARKER) else {
        return Err(SummarizerError::MalformedResponse(format!(
            "missing '{HEADLINE_MARKER}' marker on first line"
        )));
    };

    let headline = headline.trim();
    if headline.is_empty() {
        return Err(SummarizerError::MalformedResponse(
            "empty headline".to_string(),
        ));
    }

    let summary = lines.collect::<Vec<_>>().join("\n");
    let summary = summary.trim();
    if summary.is_empty() {
        return Err(SummarizerError::MalformedResponse(
            "empty summary body".to_string(),
        ));
    }

    Ok((headline.to_string(), summary.to_string()))
}

/// Models habitually wrap replies in markdown code fences even when told
/// not to; strip one outer pair before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("```") {
        // The fence line may carry a language tag; drop the whole line.
        if let Some((_, inner)) = rest.split_once('\n') {
            if let Some(inner) = inner.trim_end().strip_suffix("```") {
                return inner.trim();
            }
        }
    }
    trimmed
}
