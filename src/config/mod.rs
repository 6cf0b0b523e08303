//! Configuration handling for the application.
//!
//! Everything is read from environment variables with sensible development
//! defaults, so the binary runs out of the box and deployments override only
//! what they need. The `Config::from_env` method performs that loading and
//! validates the numeric knobs.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable names. Keeping them public lets other crates (tests,
/// build scripts) refer to them if needed later.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "NEWSBRIEF_MODEL";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "NEWSBRIEF_FETCH_TIMEOUT_SECS";
pub const ENV_BACKEND_TIMEOUT_SECS: &str = "NEWSBRIEF_BACKEND_TIMEOUT_SECS";
pub const ENV_MIN_WORDS: &str = "NEWSBRIEF_MIN_WORDS";
pub const ENV_MAX_WORDS: &str = "NEWSBRIEF_MAX_WORDS";

/// Default development values used when environment variables are absent.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MIN_WORDS: usize = 70;
const DEFAULT_MAX_WORDS: usize = 150;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_key: Option<String>,
    model: String,
    fetch_timeout_secs: u64,
    backend_timeout_secs: u64,
    min_words: usize,
    max_words: usize,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        fetch_timeout_secs: u64,
        backend_timeout_secs: u64,
        min_words: usize,
        max_words: usize,
    ) -> Self {
        Self {
            api_key,
            model: model.into(),
            fetch_timeout_secs,
            backend_timeout_secs,
            min_words,
            max_words,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// Fails only when a variable is present but malformed (non-numeric
    /// timeout, inverted word bounds). A missing API key is not an error
    /// here; callers that need the backend check `api_key()` themselves.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|v| !v.is_empty());
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let fetch_timeout_secs = env_u64(ENV_FETCH_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS)?;
        let backend_timeout_secs =
            env_u64(ENV_BACKEND_TIMEOUT_SECS, DEFAULT_BACKEND_TIMEOUT_SECS)?;
        let min_words = env_usize(ENV_MIN_WORDS, DEFAULT_MIN_WORDS)?;
        let max_words = env_usize(ENV_MAX_WORDS, DEFAULT_MAX_WORDS)?;
        if min_words == 0 || min_words > max_words {
            return Err(ConfigError::InvalidValue {
                field: ENV_MIN_WORDS,
                reason: format!("word bounds {min_words}..{max_words} are not a valid range"),
            });
        }
        Ok(Self {
            api_key,
            model,
            fetch_timeout_secs,
            backend_timeout_secs,
            min_words,
            max_words,
        })
    }

    /// API key for the generative backend, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    /// Model identifier sent to the generative backend.
    pub fn model(&self) -> &str {
        &self.model
    }
    /// Upper bound on a single page fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
    /// Upper bound on a single backend call.
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
    /// Requested summary length, in words.
    pub fn word_bounds(&self) -> (usize, usize) {
        (self.min_words, self.max_words)
    }

}

/// Development defaults (mirrors `from_env` with no env overrides).
impl Default for Config {
    fn default() -> Self {
        Self::new(
            None,
            DEFAULT_MODEL,
            DEFAULT_FETCH_TIMEOUT_SECS,
            DEFAULT_BACKEND_TIMEOUT_SECS,
            DEFAULT_MIN_WORDS,
            DEFAULT_MAX_WORDS,
        )
    }
}

fn env_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: key,
            reason: format!("'{raw}' is not a whole number of seconds"),
        }),
        Err(_) => Ok(default),
    }
}

fn env_usize(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: key,
            reason: format!("'{raw}' is not a whole number of words"),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
