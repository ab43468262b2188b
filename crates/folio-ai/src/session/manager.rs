//! ConversationSession struct, accessors, and state helpers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_common::{Event, EventBus, MessageSource, SessionId};
use tokio::sync::broadcast;
use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{AiClient, Message};

use super::history::MessageHistory;
use super::types::{ChatMessage, ConversationState, MessageKind, SessionSettings};

const EVENT_CAPACITY: usize = 64;

/// One chat view's conversation with the assistant.
pub struct ConversationSession {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn AiClient>,
    pub(super) settings: SessionSettings,
    pub(super) state: Mutex<ConversationState>,
    pub(super) events: EventBus,
}

impl ConversationSession {
    /// Start a session whose history holds only the welcome message.
    pub fn new(client: Arc<dyn AiClient>, settings: SessionSettings) -> Self {
        let mut history = MessageHistory::new(settings.max_messages);
        history.push(ChatMessage::welcome(settings.welcome_message.clone()));

        let id = SessionId::new();
        debug!(session = %id, max_messages = history.capacity(), "conversation started");

        Self {
            id,
            client,
            settings,
            state: Mutex::new(ConversationState {
                history,
                pending: false,
                last_error: None,
                usage: TokenTracker::new(),
            }),
            events: EventBus::new(EVENT_CAPACITY),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Snapshot of the retained messages, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_state().history.to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.lock_state().history.len()
    }

    pub fn is_pending(&self) -> bool {
        self.lock_state().pending
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    pub fn usage(&self) -> TokenTracker {
        self.lock_state().usage.clone()
    }

    /// Called whenever the draft input changes: drops the error banner.
    pub fn clear_error_on_edit(&self) {
        let mut state = self.lock_state();
        if state.last_error.take().is_some() {
            self.events.publish(Event::ErrorCleared);
        }
    }

    /// Announce that the view is going away.
    pub fn close(&self) {
        debug!(session = %self.id, "conversation closed");
        self.events.publish(Event::Shutdown);
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append with the history cap applied, publishing the change.
    pub(super) fn append(&self, state: &mut ConversationState, message: ChatMessage) {
        let appended = Event::MessageAppended {
            id: message.id.clone(),
            source: message.source,
            text: message.text.clone(),
        };
        for evicted in state.history.push(message) {
            self.events.publish(Event::MessageEvicted { id: evicted.id });
        }
        self.events.publish(appended);
    }

    /// Messages for the assistant: the persona, then either every retained
    /// turn or only the newest user text.
    pub(super) fn build_request(&self, state: &ConversationState) -> Vec<Message> {
        let mut request = vec![Message::system(self.settings.persona.clone())];

        let to_message = |m: &ChatMessage| match m.source {
            MessageSource::User => Message::user(m.text.clone()),
            MessageSource::Assistant => Message::assistant(m.text.clone()),
        };

        if self.settings.replay_history {
            request.extend(
                state
                    .history
                    .iter()
                    .filter(|m| m.kind == MessageKind::Turn)
                    .map(to_message),
            );
        } else if let Some(latest) = state.history.last() {
            request.push(to_message(latest));
        }

        request
    }
}
