//! Session types and the in-flight guard.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, Utc};
use folio_common::{new_id, Event, EventBus, MessageSource};

use crate::token_tracker::TokenTracker;
use crate::AssistantUnavailable;

use super::history::MessageHistory;

pub const DEFAULT_MAX_MESSAGES: usize = 100;
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// What a message represents in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The synthetic greeting a session starts with.
    Welcome,
    /// A user utterance or an assistant reply.
    Turn,
    /// The assistant-side notice appended when a request fails.
    Failure,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub source: MessageSource,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(source: MessageSource, kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            source,
            text: text.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageSource::User, MessageKind::Turn, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(MessageSource::Assistant, MessageKind::Turn, text)
    }

    pub(crate) fn welcome(text: impl Into<String>) -> Self {
        Self::new(MessageSource::Assistant, MessageKind::Welcome, text)
    }

    pub(crate) fn failure(reason: &str) -> Self {
        Self::new(
            MessageSource::Assistant,
            MessageKind::Failure,
            format!("Sorry, I encountered an error: {reason}. Please try again."),
        )
    }

    /// Local wall-clock time as `HH:MM`.
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Constructor-time session parameters.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub welcome_message: String,
    pub persona: String,
    pub bot_name: String,
    /// Retained history cap, welcome message included.
    pub max_messages: usize,
    /// Longer input is truncated to this many characters.
    pub max_input_chars: usize,
    /// Send earlier turns with each request instead of only the new text.
    pub replay_history: bool,
}

impl SessionSettings {
    pub fn new(welcome_message: impl Into<String>) -> Self {
        Self {
            welcome_message: welcome_message.into(),
            persona: String::new(),
            bot_name: "Assistant".to_string(),
            max_messages: DEFAULT_MAX_MESSAGES,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            replay_history: false,
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn with_max_messages(mut self, max: usize) -> Self {
        self.max_messages = max;
        self
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_replay_history(mut self, replay: bool) -> Self {
        self.replay_history = replay;
        self
    }
}

/// Why `submit` left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The text was empty after trimming.
    Empty,
    /// A request is already in flight.
    Pending,
}

/// Result of one `submit` call.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    /// The assistant replied; the reply was appended.
    Replied(ChatMessage),
    /// The assistant was unavailable; a notice was appended.
    Failed(AssistantUnavailable),
}

impl SubmitOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Mutable conversation state, guarded by the session's mutex.
pub(crate) struct ConversationState {
    pub(crate) history: MessageHistory,
    pub(crate) pending: bool,
    pub(crate) last_error: Option<String>,
    pub(crate) usage: TokenTracker,
}

/// Clears `pending` on drop so a submission can never leave the session
/// stuck, even if its future is dropped mid-request.
pub(crate) struct PendingGuard<'a> {
    state: &'a Mutex<ConversationState>,
    events: &'a EventBus,
}

impl<'a> PendingGuard<'a> {
    pub(crate) fn new(state: &'a Mutex<ConversationState>, events: &'a EventBus) -> Self {
        Self { state, events }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.pending {
            state.pending = false;
            self.events.publish(Event::PendingChanged(false));
        }
    }
}
