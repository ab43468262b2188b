//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiResponse, AssistantUnavailable, Message};

use super::client::{status_reason, GeminiClient};

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AssistantUnavailable> {
        let body = self.build_request_body(messages);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = messages.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantUnavailable::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantUnavailable::status(
                status.as_u16(),
                status_reason(status, &text),
            ));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssistantUnavailable::malformed(e.to_string()))?;

        let parsed = self.parse_response(json)?;
        debug!(
            model = %self.config.model,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "Gemini API response"
        );
        Ok(parsed)
    }
}
