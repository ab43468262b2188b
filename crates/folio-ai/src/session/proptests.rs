//! Property tests for history bounds across arbitrary submit sequences.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;

use super::*;
use crate::{AiClient, AiResponse, AssistantUnavailable, Message, TokenUsage};

struct ScriptedAssistant {
    replies: Mutex<VecDeque<bool>>,
}

#[async_trait]
impl AiClient for ScriptedAssistant {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AssistantUnavailable> {
        let ok = self.replies.lock().unwrap().pop_front().unwrap_or(true);
        let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
        if ok {
            Ok(AiResponse {
                content: format!("re: {last}"),
                usage: TokenUsage::default(),
            })
        } else {
            Err(AssistantUnavailable::transport("network error"))
        }
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn history_never_exceeds_cap(
        max in 1usize..8,
        script in proptest::collection::vec(any::<bool>(), 0..20),
    ) {
        let client = Arc::new(ScriptedAssistant { replies: Mutex::new(script.iter().copied().collect()) });
        let session = ConversationSession::new(client, SessionSettings::new("hi").with_max_messages(max));

        runtime().block_on(async {
            for (i, _) in script.iter().enumerate() {
                session.submit(&format!("question {i}")).await;
            }
        });

        let expected_total = 1 + 2 * script.len();
        prop_assert_eq!(session.message_count(), expected_total.min(max));
        prop_assert!(!session.is_pending());
    }

    #[test]
    fn newest_message_always_retained(
        max in 1usize..5,
        script in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        let client = Arc::new(ScriptedAssistant { replies: Mutex::new(script.iter().copied().collect()) });
        let session = ConversationSession::new(client, SessionSettings::new("hi").with_max_messages(max));

        let last_ok = *script.last().unwrap();
        let n = script.len();
        runtime().block_on(async {
            for i in 0..n {
                session.submit(&format!("question {i}")).await;
            }
        });

        let messages = session.messages();
        let newest = messages.last().unwrap();
        if last_ok {
            prop_assert_eq!(&newest.text, &format!("re: question {}", n - 1));
            prop_assert!(session.last_error().is_none());
        } else {
            prop_assert_eq!(newest.kind, MessageKind::Failure);
            let last_error = session.last_error();
            prop_assert_eq!(last_error.as_deref(), Some("network error"));
        }
    }

    #[test]
    fn retained_messages_keep_insertion_order(
        max in 2usize..6,
        count in 1usize..10,
    ) {
        let client = Arc::new(ScriptedAssistant { replies: Mutex::new(VecDeque::new()) });
        let session = ConversationSession::new(client, SessionSettings::new("hi").with_max_messages(max));

        runtime().block_on(async {
            for i in 0..count {
                session.submit(&format!("q{i}")).await;
            }
        });

        let stamps: Vec<_> = session.messages().iter().map(|m| m.timestamp).collect();
        prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
