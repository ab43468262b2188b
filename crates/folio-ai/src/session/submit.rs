//! The submit cycle: guard, append, ask, resolve.

use folio_common::{new_correlation_id, Event};
use tracing::{debug, warn};

use super::manager::ConversationSession;
use super::types::{ChatMessage, IgnoreReason, PendingGuard, SubmitOutcome};

impl ConversationSession {
    /// Submit the user's draft.
    ///
    /// Empty (after trimming) input and input arriving while a request is in
    /// flight are ignored without touching the session. Otherwise the user
    /// message is appended, the assistant is asked, and either its reply or
    /// a failure notice is appended. Failures never propagate: the reason is
    /// kept in `last_error` and the session stays usable.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!(session = %self.id, "ignoring empty submission");
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }
        let user_text = truncate_chars(trimmed, self.settings.max_input_chars.max(1));

        let request = {
            let mut state = self.lock_state();
            if state.pending {
                debug!(session = %self.id, "ignoring submission while a request is pending");
                return SubmitOutcome::Ignored(IgnoreReason::Pending);
            }

            state.pending = true;
            if state.last_error.take().is_some() {
                self.events.publish(Event::ErrorCleared);
            }
            self.append(&mut state, ChatMessage::user(user_text));
            self.events.publish(Event::PendingChanged(true));
            self.build_request(&state)
        };
        let pending = PendingGuard::new(&self.state, &self.events);

        let request_id = new_correlation_id();
        debug!(
            session = %self.id,
            request = %request_id,
            turns = request.len() - 1,
            "asking assistant"
        );
        let result = self.client.send_message(&request).await;

        let outcome = {
            let mut state = self.lock_state();
            match result {
                Ok(response) => {
                    state.usage.record(&response.usage);
                    let reply = ChatMessage::assistant(response.content);
                    self.append(&mut state, reply.clone());
                    debug!(session = %self.id, request = %request_id, "assistant replied");
                    SubmitOutcome::Replied(reply)
                }
                Err(err) => {
                    warn!(
                        session = %self.id,
                        request = %request_id,
                        kind = ?err.kind,
                        "assistant unavailable: {err}"
                    );
                    state.usage.record_failure();
                    self.append(&mut state, ChatMessage::failure(&err.reason));
                    state.last_error = Some(err.reason.clone());
                    self.events.publish(Event::ErrorRaised(err.reason.clone()));
                    SubmitOutcome::Failed(err)
                }
            }
        };

        drop(pending);
        outcome
    }
}

/// At most `max` characters of `text`, cut on a character boundary.
pub(super) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
