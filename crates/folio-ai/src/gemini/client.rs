//! Gemini API client struct, request building, and response parsing.

use crate::{AiResponse, AssistantUnavailable, Message, Role, TokenUsage};

use super::config::{GeminiConfig, HARM_CATEGORIES};

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AssistantUnavailable> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            AssistantUnavailable::not_configured(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// System messages become `systemInstruction`; the rest map to
    /// `user`/`model` turns in order.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue,
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let safety_settings: Vec<_> = HARM_CATEGORIES
            .iter()
            .map(|category| {
                serde_json::json!({
                    "category": category,
                    "threshold": self.config.safety_threshold,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
                "topK": self.config.top_k,
                "topP": self.config.top_p,
                "maxOutputTokens": self.config.max_output_tokens,
            },
            "safetySettings": safety_settings,
        });

        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System && !m.content.trim().is_empty())
            .map(|m| m.content.as_str())
            .collect();
        if !system.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.join("\n\n") }]
            });
        }

        body
    }

    /// Parse a successful Gemini response.
    pub(crate) fn parse_response(
        &self,
        json: serde_json::Value,
    ) -> Result<AiResponse, AssistantUnavailable> {
        let first = json["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .ok_or_else(|| match json["promptFeedback"]["blockReason"].as_str() {
                Some(reason) => AssistantUnavailable::malformed(format!("prompt blocked: {reason}")),
                None => invalid_format(),
            })?;

        let parts = first["content"]["parts"]
            .as_array()
            .ok_or_else(invalid_format)?;

        let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if texts.is_empty() {
            return Err(invalid_format());
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse {
            content: texts.concat(),
            usage,
        })
    }
}

fn invalid_format() -> AssistantUnavailable {
    AssistantUnavailable::malformed("invalid response format from Gemini API")
}

/// Failure reason for a non-success response: the API's own message when
/// the body carries one.
pub(crate) fn status_reason(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error, status {}", status.as_u16()))
}
