//! Command-line interface definitions.
//!
//! One run summarizes one article: either fetched from a URL with a named
//! source, or read as plain text from stdin.

use clap::Parser;

/// Command-line arguments for the newsbrief binary.
///
/// # Examples
///
/// ```sh
/// # Summarize an article from a built-in source
/// newsbrief --url https://www.thedailystar.net/... --source "The Daily Star"
///
/// # Unlisted site, caller supplies the selector
/// newsbrief --url https://example.com/story --source custom --selector ".article-body"
///
/// # Summarize pasted text
/// cat article.txt | newsbrief --stdin
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Article URL to fetch and summarize
    #[arg(short, long)]
    pub url: Option<String>,

    /// News source name from the built-in registry, or 'custom' to use --selector
    #[arg(short, long)]
    pub source: Option<String>,

    /// CSS selector (.class, #id, [attr]) or space-separated class list for 'custom' sources
    #[arg(long)]
    pub selector: Option<String>,

    /// Read article text from stdin instead of fetching a URL
    #[arg(long, conflicts_with = "url")]
    pub stdin: bool,

    /// List the built-in sources and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Print the result as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}
