use crate::summarizer::backend::GenerativeBackend;
use crate::summarizer::errors::BackendError;
use crate::summarizer::prompt::GenerationParams;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// REST client for the Gemini `generateContent` endpoint.
///
/// The API key travels in the `x-goog-api-key` header, never in the URL,
/// so it cannot leak into logs or error messages.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
    params: GenerationParams,
}

impl GeminiClient {
    /// Create a client for `model`, bounding every call by `timeout`.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;
        Ok(Self {
            http_client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            params: GenerationParams::default(),
        })
    }

    /// Set a custom base URL (for tests, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the default generation parameters.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::from(self.params),
        };

        let start = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "gemini request failed");
                BackendError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "gemini api error");
            return Err(BackendError::Api { status, message });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        // A response with no candidates (safety block, empty generation)
        // decodes to an empty string; the caller decides what that means.
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            chars = text.len(),
            "gemini generation complete"
        );

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}
