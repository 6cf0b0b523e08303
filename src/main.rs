use anyhow::{Context, Result};
use clap::Parser;
use newsbrief::cli::Cli;
use newsbrief::config::Config;
use newsbrief::pipeline::Pipeline;
use newsbrief::sources;
use newsbrief::summarizer::GeminiClient;
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.list_sources {
        for source in sources::sources() {
            println!("{}", source.name);
        }
        return Ok(());
    }

    // Load configuration
    let config = Config::from_env()?;
    let api_key = config
        .api_key()
        .context("GEMINI_API_KEY is not set")?
        .to_string();
    let backend = GeminiClient::new(api_key, config.model(), config.backend_timeout())?;
    let pipeline = Pipeline::new(Arc::new(backend), &config);

    // Interrupt cancels the in-flight run instead of killing the process
    // mid-request.
    let cancel = pipeline.cancellation_token();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for interrupt: {e}");
            return;
        }
        info!("interrupt received, cancelling run");
        cancel.cancel();
    });

    let result = if cli.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read article text from stdin")?;
        pipeline.summarize_text(&text).await?
    } else {
        let url = cli
            .url
            .as_deref()
            .context("either --url or --stdin is required")?;
        let source = cli
            .source
            .as_deref()
            .context("--source is required with --url (use --list-sources to see names)")?;
        pipeline
            .summarize_article(url, source, cli.selector.as_deref())
            .await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.headline);
        println!();
        println!("{}", result.summary);
        println!();
        println!("[language: {}]", result.language);
    }

    Ok(())
}
