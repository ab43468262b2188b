//! Plain-text rendering of messages and session events.

use folio_ai::ChatMessage;
use folio_common::{Event, MessageSource};
use tokio::sync::broadcast::{self, error::RecvError};

const USER_LABEL: &str = "You";

fn speaker(source: MessageSource, bot_name: &str) -> &str {
    match source {
        MessageSource::User => USER_LABEL,
        MessageSource::Assistant => bot_name,
    }
}

/// `[HH:MM] speaker: text`
pub fn message_line(time: &str, speaker: &str, text: &str) -> String {
    format!("[{time}] {speaker}: {text}")
}

pub fn chat_message_line(message: &ChatMessage, bot_name: &str) -> String {
    message_line(
        &message.display_time(),
        speaker(message.source, bot_name),
        &message.text,
    )
}

pub fn error_banner(reason: &str) -> String {
    format!("!! API Error: {reason}")
}

pub fn typing_line(bot_name: &str) -> String {
    format!("{bot_name} is typing...")
}

/// The line to print for `event`, if any.
pub fn event_line(event: &Event, bot_name: &str, time: &str) -> Option<String> {
    match event {
        Event::MessageAppended { source, text, .. } => {
            Some(message_line(time, speaker(*source, bot_name), text))
        }
        Event::PendingChanged(true) => Some(typing_line(bot_name)),
        Event::ErrorRaised(reason) => Some(error_banner(reason)),
        _ => None,
    }
}

fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Print session events until the session shuts down.
pub async fn render_events(mut events: broadcast::Receiver<Event>, bot_name: String) {
    loop {
        match events.recv().await {
            Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
            Ok(event) => {
                if let Some(line) = event_line(&event, &bot_name, &now_hhmm()) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Renderer fell behind session events");
            }
        }
    }
}
