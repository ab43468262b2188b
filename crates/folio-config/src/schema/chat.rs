//! Chat view configuration types.

use std::path::PathBuf;

use folio_common::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSONA: &str = "You are the assistant on a personal developer portfolio. \
Answer questions about the portfolio owner's skills, projects, experience and \
contact details. Be friendly and concise. If you do not know something about \
the owner, say so instead of guessing.";

/// Chat session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub bot_name: String,
    pub welcome_message: String,
    /// Persona preamble sent with every request.
    pub persona: String,
    /// When set, the persona is read from this file instead.
    pub persona_file: Option<PathBuf>,
    /// Valid range: 1-10000.
    pub max_messages: u32,
    /// Valid range: 1-100000.
    pub max_input_chars: u32,
    /// Send prior turns along with the new message.
    pub replay_history: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "Portfolio Assistant".into(),
            welcome_message: "Hey! I'm the portfolio chatbot. Ask me anything about the \
                              owner and their coding experience."
                .into(),
            persona: DEFAULT_PERSONA.into(),
            persona_file: None,
            max_messages: 100,
            max_input_chars: 1000,
            replay_history: false,
        }
    }
}

impl ChatConfig {
    /// The persona text, loading `persona_file` if one is configured.
    pub fn resolve_persona(&self) -> Result<String, ConfigError> {
        let Some(ref path) = self.persona_file else {
            return Ok(self.persona.clone());
        };

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.clone()));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "chat.persona_file {} is empty",
                path.display()
            )));
        }
        Ok(text.to_string())
    }
}
