//! Remote assistant (Gemini) configuration types.

use serde::{Deserialize, Serialize};

/// Gemini safety filter threshold, applied to every harm category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Default)]
pub enum SafetyThreshold {
    BlockNone,
    BlockOnlyHigh,
    #[default]
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

impl SafetyThreshold {
    /// Wire name used in the `safetySettings` request field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyThreshold::BlockNone => "BLOCK_NONE",
            SafetyThreshold::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
            SafetyThreshold::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            SafetyThreshold::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
        }
    }
}

/// Remote assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    /// Environment variable holding the API key. The key itself is never
    /// stored in the config file.
    pub api_key_env: String,
    pub base_url: String,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-1000.
    pub top_k: u32,
    /// Valid range: 0.0-1.0.
    pub top_p: f64,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    pub safety_threshold: SafetyThreshold,
    /// Valid range: 1-300.
    pub connect_timeout_secs: u32,
    /// Overall request timeout. Unset means the transport default.
    pub request_timeout_secs: Option<u32>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            safety_threshold: SafetyThreshold::BlockMediumAndAbove,
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}
