//! Conversation session management.
//!
//! A `ConversationSession` holds the bounded message history for one chat
//! view and mediates exactly one request/response cycle at a time with an
//! `AiClient`. State changes are published on an event bus so views can
//! render without polling.

mod history;
mod manager;
mod submit;
mod types;

#[cfg(test)]
mod proptests;

pub use history::MessageHistory;
pub use manager::ConversationSession;
pub use types::{
    ChatMessage, IgnoreReason, MessageKind, SessionSettings, SubmitOutcome,
    DEFAULT_MAX_INPUT_CHARS, DEFAULT_MAX_MESSAGES,
};
