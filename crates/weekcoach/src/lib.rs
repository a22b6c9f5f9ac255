//! Weekly planning coach: collect a week's schedule and goals, ask a hosted
//! LLM for coaching advice, and print the tips.
//!
//! The pipeline is three sequential stages with one-way data flow and a
//! single network call:
//!
//! ```text
//! input (collect) ──▶ prompt (build) ──▶ advice (complete + parse) ──▶ render
//! ```
//!
//! # Where to find things
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`plan`] | [`Schedule`], [`Goal`], [`Tip`] — the in-memory data model |
//! | [`input`] | Line-oriented collection behind the injectable [`input::LineSource`] trait |
//! | [`prompt`] | Deterministic prompt construction from a schedule and goals |
//! | [`advice`] | The one completion request, fence stripping, tip parsing, [`advice::AdviceError`] |
//! | [`render`] | Pure formatting of banners, summaries, and tips |
//! | [`config`] | [`CoachConfig`] — model, token cap, credential, endpoint |
//!
//! The Messages API wire types and [`AnthropicClient`] live at the crate
//! root. There is no conversation state, no streaming, no tool use, and no
//! retry — one request per run, then the process is done.
//!
//! # Example
//!
//! ```ignore
//! use weekcoach::{advice, prompt, CoachConfig, Goal, Schedule, Timeframe, Weekday};
//!
//! # async fn demo() -> Result<(), weekcoach::advice::AdviceError> {
//! let mut schedule = Schedule::new();
//! schedule.add_activity(Weekday::Mon, "09:00-10:30 Team meeting");
//! let goals = vec![Goal::new("Learn guitar", Timeframe::Medium)];
//!
//! let config = CoachConfig::from_env();
//! let tips = advice::generate_tips(&config, &prompt::build_prompt(&schedule, &goals)).await?;
//! for tip in &tips {
//!     println!("[{}] {}", tip.category, tip.tip);
//! }
//! # Ok(())
//! # }
//! ```

pub mod advice;
pub mod config;
pub mod input;
pub mod plan;
pub mod prompt;
pub mod render;

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

use advice::AdviceError;

// Re-export the types most callers need.
pub use config::CoachConfig;
pub use plan::{Category, Goal, Schedule, Timeframe, Tip, Weekday};

// ── Constants ──────────────────────────────────────────────────────

/// Hosted completion API base URL.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Version header value the Messages endpoint requires.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Model used for coaching completions.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Response-length cap for a coaching completion.
pub const ADVICE_MAX_TOKENS: u32 = 1500;

// ── Request types ──────────────────────────────────────────────────

/// Role of a message in the conversation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A message in the request body.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Messages API request body. Optional fields are omitted from
/// serialization when unset.
#[derive(Serialize, Debug, Default)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawMessagesResponse {
    content: Option<Vec<ContentBlock>>,
    error: Option<ApiErrorBody>,
    #[serde(default)]
    usage: Option<UsageInfo>,
    stop_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: String,
}

/// Token usage statistics.
#[derive(Deserialize, Debug, Clone)]
pub struct UsageInfo {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

/// Clean return type from [`AnthropicClient::complete`].
#[derive(Debug)]
pub struct Completion {
    /// Concatenated text blocks, or `None` when the reply had no text.
    pub text: Option<String>,
    pub usage: Option<UsageInfo>,
    pub stop_reason: Option<String>,
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the Messages completion endpoint.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a client against the hosted endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AdviceError> {
        Self::with_base_url(api_key, ANTHROPIC_API_URL)
    }

    /// Create a client against a custom base URL. Tests point this at a
    /// local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, AdviceError> {
        let client = reqwest::Client::builder()
            .user_agent("weekcoach/0.1")
            .build()
            .map_err(|e| AdviceError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Send one completion request. No retries, no streaming, no timeout
    /// beyond the HTTP library's defaults.
    pub async fn complete(&self, body: &MessagesRequest) -> Result<Completion, AdviceError> {
        debug!(
            "completion request: model={}, messages={}, max_tokens={}",
            body.model,
            body.messages.len(),
            body.max_tokens,
        );
        trace!(
            "request payload size: {} bytes",
            serde_json::to_string(body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| AdviceError::Transport(format!("request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| AdviceError::Transport(format!("failed to read response: {e}")))?;

        debug!(
            "completion response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(AdviceError::Transport(format!("API HTTP {status}: {text}")));
        }

        let parsed: RawMessagesResponse = serde_json::from_str(&text)
            .map_err(|e| AdviceError::Transport(format!("failed to parse response: {e}")))?;

        if let Some(err) = parsed.error {
            return Err(AdviceError::Transport(format!("API error: {}", err.message)));
        }

        if let Some(ref usage) = parsed.usage {
            debug!(
                "token usage: input={}, output={}",
                usage.input_tokens.unwrap_or(0),
                usage.output_tokens.unwrap_or(0),
            );
        }

        let text_out = parsed
            .content
            .map(|blocks| {
                blocks
                    .into_iter()
                    .filter(|b| b.block_type == "text")
                    .filter_map(|b| b.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|s| !s.is_empty());

        debug!(
            "completion output: {} chars text",
            text_out.as_deref().map_or(0, str::len)
        );

        Ok(Completion {
            text: text_out,
            usage: parsed.usage,
            stop_reason: parsed.stop_reason,
        })
    }
}
