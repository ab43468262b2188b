use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::MessageSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    MessageAppended {
        id: String,
        source: MessageSource,
        text: String,
    },
    MessageEvicted {
        id: String,
    },
    PendingChanged(bool),
    ErrorRaised(String),
    ErrorCleared,
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
