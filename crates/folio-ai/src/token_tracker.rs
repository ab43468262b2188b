//! Token usage tracking for one conversation.

use crate::TokenUsage;

/// Tracks cumulative token usage and call counts.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    /// Total usage across all successful calls.
    total: TokenUsage,
    /// Number of successful API calls.
    call_count: u64,
    /// Number of calls that ended in a failure.
    failure_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 120,
            output_tokens: 30,
        });
        tracker.record(&TokenUsage {
            input_tokens: 80,
            output_tokens: 20,
        });
        tracker.record_failure();

        assert_eq!(tracker.total().input_tokens, 200);
        assert_eq!(tracker.total().output_tokens, 50);
        assert_eq!(tracker.total_tokens(), 250);
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.failure_count(), 1);
    }
}
