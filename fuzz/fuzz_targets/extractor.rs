#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

use newsbrief::extractor::extract;
use newsbrief::sources::{self, SourceDefinition};

static CUSTOM: Lazy<SourceDefinition> =
    Lazy::new(|| sources::resolve("custom", Some(".story-body")).unwrap());

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // The extractor should never panic regardless of input
    let _ = extract(&html, &sources::sources()[0]);
    let _ = extract(&html, &CUSTOM);
});
