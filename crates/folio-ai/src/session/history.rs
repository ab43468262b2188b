//! Bounded message history with FIFO eviction.

use std::collections::VecDeque;

use super::types::ChatMessage;

/// Ordered messages with a fixed capacity. Appending past the capacity
/// drops from the front; the newest message is always kept.
#[derive(Debug, Clone)]
pub struct MessageHistory {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
}

impl MessageHistory {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a message, returning whatever was evicted to make room.
    pub fn push(&mut self, message: ChatMessage) -> Vec<ChatMessage> {
        self.messages.push_back(message);
        let overflow = self.messages.len().saturating_sub(self.capacity);
        self.messages.drain(..overflow).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_under_capacity_keeps_everything() {
        let mut history = MessageHistory::new(3);
        assert!(history.push(ChatMessage::user("a")).is_empty());
        assert!(history.push(ChatMessage::assistant("b")).is_empty());
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().text, "b");
    }

    #[test]
    fn push_over_capacity_evicts_oldest() {
        let mut history = MessageHistory::new(2);
        history.push(ChatMessage::user("a"));
        history.push(ChatMessage::user("b"));
        let evicted = history.push(ChatMessage::user("c"));

        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].text, "a");
        let texts: Vec<_> = history.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn zero_capacity_still_keeps_newest() {
        let mut history = MessageHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(ChatMessage::user("a"));
        history.push(ChatMessage::user("b"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().text, "b");
    }
}
