//! Advice generation: one completion request, fence stripping, and tip
//! parsing.
//!
//! The failure surface is the closed [`AdviceError`] set — callers can tell
//! a missing credential from a transport failure from a malformed reply
//! instead of pattern-matching on message strings. Every failure is
//! terminal for the current run; there are no retries.

use thiserror::Error;
use tracing::debug;

use crate::config::CoachConfig;
use crate::plan::Tip;
use crate::{AnthropicClient, Message, MessagesRequest};

/// Everything that can go wrong between "user confirmed" and "tips on
/// screen".
#[derive(Debug, Error)]
pub enum AdviceError {
    /// No API key was configured for this run.
    #[error("no API key configured")]
    MissingCredential,
    /// The HTTP request failed, or the API reported an error.
    #[error("completion request failed: {0}")]
    Transport(String),
    /// The completion text was not the expected JSON tip array.
    #[error("completion was not a valid tip array: {0}")]
    MalformedResponse(String),
}

/// Remove markdown code-fence markers from a completion.
///
/// Models often wrap JSON in a fenced block despite being told not to.
/// Removes the literal ```` ```json ```` and ```` ``` ```` substrings and
/// trims the remainder; clean text passes through unchanged, so the
/// operation is idempotent.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a raw completion into tips: fence-strip, then JSON-decode.
pub fn parse_tips(raw: &str) -> Result<Vec<Tip>, AdviceError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| AdviceError::MalformedResponse(e.to_string()))
}

/// Generate coaching tips for an already-built prompt.
///
/// Issues exactly one request with the configured model and token cap. The
/// credential comes from `config`, never from ambient process state, so
/// tests can exercise this path against a mock endpoint.
pub async fn generate_tips(config: &CoachConfig, prompt: &str) -> Result<Vec<Tip>, AdviceError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(AdviceError::MissingCredential)?;

    let client = AnthropicClient::with_base_url(api_key, &config.base_url)?;
    let request = MessagesRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        messages: vec![Message::user(prompt)],
        ..Default::default()
    };

    let completion = client.complete(&request).await?;
    let text = completion
        .text
        .ok_or_else(|| AdviceError::MalformedResponse("completion had no text content".into()))?;
    debug!("completion text: {} chars", text.len());

    parse_tips(&text)
}
