//! Startup wiring: turns the loaded config into an assistant client and
//! session settings.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_ai::{AiClient, AiResponse, AssistantUnavailable, GeminiClient, GeminiConfig, Message};
use folio_ai::SessionSettings;
use folio_config::schema::{AssistantConfig, ChatConfig};

/// Gemini client settings from `[assistant]`, with the key read from the
/// configured environment variable.
pub fn gemini_config(assistant: &AssistantConfig) -> Result<GeminiConfig, AssistantUnavailable> {
    let config = GeminiConfig::from_env(&assistant.api_key_env)?
        .with_model(assistant.model.clone())
        .with_base_url(assistant.base_url.clone())
        .with_temperature(assistant.temperature)
        .with_top_k(assistant.top_k)
        .with_top_p(assistant.top_p)
        .with_max_output_tokens(assistant.max_output_tokens)
        .with_safety_threshold(assistant.safety_threshold.as_str())
        .with_connect_timeout(Duration::from_secs(u64::from(assistant.connect_timeout_secs)))
        .with_request_timeout(
            assistant
                .request_timeout_secs
                .map(|secs| Duration::from_secs(u64::from(secs))),
        );
    Ok(config)
}

/// The assistant client for a chat view.
///
/// A missing key does not stop the view from opening: every request then
/// fails with the configuration message, which the session shows like any
/// other failure.
pub fn build_client(assistant: &AssistantConfig) -> Arc<dyn AiClient> {
    let client = gemini_config(assistant).and_then(GeminiClient::new);
    match client {
        Ok(client) => {
            tracing::info!(model = %client.model(), "Gemini client ready");
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!("Assistant unavailable: {e}");
            Arc::new(UnavailableClient { error: e })
        }
    }
}

/// Session parameters from `[chat]`.
pub fn session_settings(chat: &ChatConfig, persona: String, replay_history: bool) -> SessionSettings {
    SessionSettings::new(chat.welcome_message.clone())
        .with_persona(persona)
        .with_bot_name(chat.bot_name.clone())
        .with_max_messages(chat.max_messages as usize)
        .with_max_input_chars(chat.max_input_chars as usize)
        .with_replay_history(replay_history || chat.replay_history)
}

/// Stands in for the real client when it could not be built.
struct UnavailableClient {
    error: AssistantUnavailable,
}

#[async_trait]
impl AiClient for UnavailableClient {
    async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AssistantUnavailable> {
        Err(self.error.clone())
    }
}
