//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its own
//! function; `validate` calls them all and collects errors into a single
//! `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::FolioConfig;
use folio_common::ConfigError;
use helpers::{check_http_url, check_non_empty, check_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_assistant(&mut errors, config);
    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    let a = &config.assistant;
    check_non_empty(errors, "assistant.model", &a.model);
    check_non_empty(errors, "assistant.api_key_env", &a.api_key_env);
    check_http_url(errors, "assistant.base_url", &a.base_url);
    check_range(errors, "assistant.temperature", a.temperature, 0.0..=2.0);
    check_range(errors, "assistant.top_k", a.top_k, 1..=1000);
    check_range(errors, "assistant.top_p", a.top_p, 0.0..=1.0);
    check_range(errors, "assistant.max_output_tokens", a.max_output_tokens, 1..=65536);
    check_range(errors, "assistant.connect_timeout_secs", a.connect_timeout_secs, 1..=300);
    if let Some(secs) = a.request_timeout_secs {
        check_range(errors, "assistant.request_timeout_secs", secs, 1..=3600);
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &FolioConfig) {
    let c = &config.chat;
    check_non_empty(errors, "chat.bot_name", &c.bot_name);
    check_non_empty(errors, "chat.welcome_message", &c.welcome_message);
    // A persona file replaces the inline persona.
    if c.persona_file.is_none() {
        check_non_empty(errors, "chat.persona", &c.persona);
    }
    check_range(errors, "chat.max_messages", c.max_messages, 1..=10000);
    check_range(errors, "chat.max_input_chars", c.max_input_chars, 1..=100000);
}
