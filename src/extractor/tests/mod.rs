use crate::extractor::extract;
use crate::sources::{SelectorKind, SourceDefinition, resolve};

fn custom_source(selector: &str) -> SourceDefinition {
    resolve("custom", Some(selector)).expect("test selector should resolve")
}

fn class_source(selector: &str) -> SourceDefinition {
    SourceDefinition {
        name: "test".to_string(),
        selector: selector.to_string(),
        kind: SelectorKind::Class,
    }
}

#[test]
fn test_extract_single_story_div() {
    let html = r#"<div class="story-content">Hello world. This is news.</div>"#;
    let text = extract(html, &custom_source(".story-content"));
    assert_eq!(text, "Hello world. This is news.");
}

#[test]
fn test_extract_joins_elements_in_document_order() {
    let html = r#"
        <html><body>
            <div class="story">First paragraph.</div>
            <p>Unrelated chrome</p>
            <div class="story">Second paragraph.</div>
            <div class="story">Third paragraph.</div>
        </body></html>
    "#;
    let text = extract(html, &class_source("story"));
    assert_eq!(text, "First paragraph. Second paragraph. Third paragraph.");
}

#[test]
fn test_extract_matches_class_subset_in_any_order() {
    // Real pages carry extra classes and order them arbitrarily.
    let html = r#"
        <div class="story-element-text extra story-element">Body text here.</div>
    "#;
    let source = resolve("Daily Prothom Alo", None).unwrap();
    let text = extract(html, &source);
    assert_eq!(text, "Body text here.");
}

#[test]
fn test_extract_requires_all_classes() {
    let html = r#"<div class="story-element">Only one of two classes.</div>"#;
    let source = resolve("Daily Prothom Alo", None).unwrap();
    assert_eq!(extract(html, &source), "");
}

#[test]
fn test_extract_no_match_returns_empty() {
    let html = r#"<div class="content">Something else entirely.</div>"#;
    assert_eq!(extract(html, &custom_source(".missing-class")), "");
}

#[test]
fn test_extract_strips_script_and_style() {
    let html = r#"
        <div class="story">
            Visible text.
            <script>var tracking = "nope";</script>
            <style>.story { color: red; }</style>
            More visible text.
        </div>
    "#;
    let text = extract(html, &class_source("story"));
    assert_eq!(text, "Visible text. More visible text.");
}

#[test]
fn test_extract_collapses_nested_whitespace() {
    let html = "<div class=\"story\">\n  <p>Hello\t\tworld.</p>\n  <p>This  is\n news.</p>\n</div>";
    let text = extract(html, &class_source("story"));
    assert_eq!(text, "Hello world. This is news.");
}

#[test]
fn test_extract_decodes_entities() {
    let html = r#"<div class="story">Law &amp; order &mdash; a report.</div>"#;
    let text = extract(html, &class_source("story"));
    assert_eq!(text, "Law & order \u{2014} a report.");
}

#[test]
fn test_extract_with_attribute_selector() {
    let html = r#"<section data-role="article-body">Attribute matched.</section>"#;
    let text = extract(html, &custom_source(r#"[data-role="article-body"]"#));
    assert_eq!(text, "Attribute matched.");
}

#[test]
fn test_extract_with_id_selector() {
    let html = r#"<div id="main-article">By id.</div>"#;
    let text = extract(html, &custom_source("#main-article"));
    assert_eq!(text, "By id.");
}

#[test]
fn test_extract_custom_bare_class_list() {
    let html = r#"<div class="section-content margin-bottom-2 p-3">Standard body.</div>"#;
    let text = extract(html, &custom_source("section-content margin-bottom-2"));
    assert_eq!(text, "Standard body.");
}

#[test]
fn test_extract_is_idempotent() {
    let html = r#"
        <div class="story">One.</div>
        <div class="story">Two.</div>
    "#;
    let source = class_source("story");
    let first = extract(html, &source);
    let second = extract(html, &source);
    assert_eq!(first, second);
}

#[test]
fn test_extract_preserves_bengali_text() {
    let html = r#"<div class="story-element story-element-text">ঢাকায় আজ বৃষ্টি হয়েছে।</div>"#;
    let source = resolve("Daily Prothom Alo", None).unwrap();
    assert_eq!(extract(html, &source), "ঢাকায় আজ বৃষ্টি হয়েছে।");
}

#[test]
fn test_extract_handles_malformed_html() {
    let html = r#"<div class="story">Unclosed tags<p>More content"#;
    let text = extract(html, &class_source("story"));
    assert!(text.contains("Unclosed tags"));
    assert!(text.contains("More content"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            selector in "[a-z][a-z0-9-]{0,20}( [a-z][a-z0-9-]{0,20}){0,3}",
        ) {
            let _ = extract(&html, &class_source(&selector));
        }

        #[test]
        fn test_extract_output_whitespace_is_collapsed(
            html in ".*",
        ) {
            let text = extract(&html, &class_source("story"));
            prop_assert!(!text.contains("  "));
            prop_assert!(!text.contains('\n'));
            prop_assert!(text.trim() == text);
        }
    }
}
