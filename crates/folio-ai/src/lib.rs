//! Chat engine for folio.
//!
//! Provides:
//! - the `AiClient` trait, the seam between a conversation and the remote
//!   generative-language service
//! - a Gemini `generateContent` client
//! - `ConversationSession`, the bounded, single-flight chat state machine
//! - token usage tracking

pub mod error;
pub mod gemini;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use error::{AssistantUnavailable, FailureKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{
    ChatMessage, ConversationSession, IgnoreReason, MessageKind, SessionSettings, SubmitOutcome,
};
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AssistantUnavailable>;

    /// Ask once: the persona preamble plus a single user utterance.
    async fn invoke(
        &self,
        persona: &str,
        user_text: &str,
    ) -> Result<String, AssistantUnavailable> {
        let messages = [Message::system(persona), Message::user(user_text)];
        self.send_message(&messages)
            .await
            .map(|response| response.content)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl AiClient for Recorder {
        async fn send_message(
            &self,
            messages: &[Message],
        ) -> Result<AiResponse, AssistantUnavailable> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            Ok(AiResponse {
                content: "ok".into(),
                usage: TokenUsage::default(),
            })
        }
    }

    #[tokio::test]
    async fn invoke_sends_persona_then_user_text() {
        let client = Recorder {
            seen: Mutex::new(Vec::new()),
        };
        let reply = client.invoke("Be brief.", "Who are you?").await.unwrap();
        assert_eq!(reply, "ok");

        let seen = client.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![Message::system("Be brief."), Message::user("Who are you?")]
        );
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert!(json.contains("\"assistant\""));
    }
}
