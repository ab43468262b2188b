//! Tests for the full validation pipeline.

use super::*;
use crate::schema::FolioConfig;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_max_messages_zero() {
    let mut config = FolioConfig::default();
    config.chat.max_messages = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.max_messages"));
}

#[test]
fn catches_max_input_chars_too_large() {
    let mut config = FolioConfig::default();
    config.chat.max_input_chars = 1_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.max_input_chars"));
}

#[test]
fn catches_blank_welcome_message() {
    let mut config = FolioConfig::default();
    config.chat.welcome_message = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.welcome_message must not be empty"));
}

#[test]
fn blank_persona_allowed_when_file_configured() {
    let mut config = FolioConfig::default();
    config.chat.persona = String::new();
    assert!(validate(&config).is_err());

    config.chat.persona_file = Some("/etc/folio/persona.txt".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = FolioConfig::default();
    config.assistant.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
}

#[test]
fn catches_nan_top_p() {
    let mut config = FolioConfig::default();
    config.assistant.top_p = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.top_p"));
}

#[test]
fn catches_top_k_zero() {
    let mut config = FolioConfig::default();
    config.assistant.top_k = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.top_k"));
}

#[test]
fn catches_bad_base_url() {
    let mut config = FolioConfig::default();
    config.assistant.base_url = "generativelanguage.googleapis.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.base_url"));
}

#[test]
fn catches_request_timeout_zero() {
    let mut config = FolioConfig::default();
    config.assistant.request_timeout_secs = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.request_timeout_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.chat.max_messages = 0;
    config.assistant.top_k = 5000;
    config.assistant.model = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.max_messages"));
    assert!(err.contains("assistant.top_k"));
    assert!(err.contains("assistant.model"));
    assert_eq!(err.matches("; ").count(), 2);
}
