//! Run configuration with an injectable credential and endpoint.

use crate::{ADVICE_MAX_TOKENS, ANTHROPIC_API_URL, API_KEY_ENV, DEFAULT_MODEL};

/// Settings for one coaching run.
///
/// The credential travels inside the config instead of being read from the
/// environment at call time, so the advice path can be driven in tests with
/// a mock endpoint and without touching process state. A missing key only
/// disables tip generation; collection and summaries are unaffected.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Model identifier sent with the request.
    pub model: String,
    /// Response-length cap in tokens.
    pub max_tokens: u32,
    /// API key, or `None` when no credential is available.
    pub api_key: Option<String>,
    /// Endpoint base URL. Tests point this at a local mock server.
    pub base_url: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: ADVICE_MAX_TOKENS,
            api_key: None,
            base_url: ANTHROPIC_API_URL.to_string(),
        }
    }
}

impl CoachConfig {
    /// Default config with the key taken from `ANTHROPIC_API_KEY`, if set.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }
}
