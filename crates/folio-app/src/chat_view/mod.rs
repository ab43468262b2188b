//! Interactive terminal chat view.
//!
//! Mounts one conversation session, renders its history and events to
//! stdout, and turns each stdin line into a draft edit plus a submit.

mod render;

use std::sync::Arc;

use folio_ai::ConversationSession;
use folio_common::FolioError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use render::chat_message_line;

const QUIT_COMMAND: &str = "/quit";

/// Run the view until `/quit` or end of input.
pub async fn run(session: Arc<ConversationSession>) -> Result<(), FolioError> {
    let bot_name = session.settings().bot_name.clone();
    for message in session.messages() {
        println!("{}", chat_message_line(&message, &bot_name));
    }

    let renderer = tokio::spawn(render::render_events(session.subscribe(), bot_name));

    let forwarded = forward_lines(&session, BufReader::new(tokio::io::stdin())).await;

    session.close();
    if let Err(e) = renderer.await {
        tracing::warn!("Renderer task failed: {e}");
    }
    tracing::debug!(session = %session.id(), "Chat view closed");
    forwarded.map_err(FolioError::from)
}

/// Submit each input line in order, waiting for every reply before reading
/// the next line. Stops at `/quit` or end of input.
async fn forward_lines<R>(session: &ConversationSession, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if is_quit(&line) {
            break;
        }
        session.clear_error_on_edit();
        session.submit(&line).await;
    }
    Ok(())
}

fn is_quit(line: &str) -> bool {
    line.trim() == QUIT_COMMAND
}
