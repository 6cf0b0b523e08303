//! Content extractor: selector-driven article text from raw HTML.
//!
//! The extractor itself never fails. Zero matching elements yield an empty
//! string, which the orchestrator treats as the no-content failure; matched
//! elements are sanitized, flattened to visible text and concatenated in
//! document order so the narrative reads in page order.

pub mod language;
pub mod model;

#[cfg(test)]
mod tests;

pub use language::{UNKNOWN_LANGUAGE, detect_language};
pub use model::{ExtractedContent, collapse_whitespace};

use crate::sources::{SelectorKind, SourceDefinition, is_css_selector};
use ammonia::Builder;
use scraper::{ElementRef, Html, Selector};

/// Concatenated visible text of all elements matching the source's
/// selector, in document order, whitespace collapsed. Empty when nothing
/// matches.
pub fn extract(html: &str, source: &SourceDefinition) -> String {
    let document = Html::parse_document(html);

    let use_css = match source.kind {
        SelectorKind::Class => false,
        SelectorKind::Custom => is_css_selector(&source.selector),
    };

    let texts: Vec<String> = if use_css {
        // resolve() validated the selector; a hand-built definition that
        // fails to parse here simply matches nothing.
        let Ok(selector) = Selector::parse(&source.selector) else {
            return String::new();
        };
        document.select(&selector).map(element_text).collect()
    } else {
        let needed: Vec<&str> = source.selector.split_whitespace().collect();
        // An empty class list would match every element; treat it as
        // matching none.
        if needed.is_empty() {
            return String::new();
        }
        document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| has_all_classes(el, &needed))
            .map(element_text)
            .collect()
    };

    let joined = texts
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}

fn has_all_classes(element: &ElementRef, needed: &[&str]) -> bool {
    needed
        .iter()
        .all(|class| element.value().classes().any(|c| c == *class))
}

/// Visible text of one matched element. Sanitizing first strips script and
/// style bodies, so they never leak into the text.
fn element_text(element: ElementRef) -> String {
    let clean = Builder::default().clean(&element.inner_html()).to_string();
    let fragment = Html::parse_fragment(&clean);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&text)
}
