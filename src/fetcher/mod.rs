//! Content fetcher: one bounded HTTP GET per article URL.
//!
//! Validates the URL, downloads the page through a shared client, enforces
//! size and content-type limits, and decodes the body to UTF-8 using the
//! declared or detected charset.

pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::fetch;
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
