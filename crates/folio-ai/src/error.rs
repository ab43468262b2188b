//! The single failure type of the assistant seam.

/// What went wrong talking to the assistant. Diagnostic only: every kind is
/// handled the same way by a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No API key or unusable client settings.
    NotConfigured,
    /// Connection, DNS, TLS or body read failure.
    Transport,
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
    /// The response body did not contain a reply.
    Malformed,
}

/// The assistant could not produce a reply.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{reason}")]
pub struct AssistantUnavailable {
    pub kind: FailureKind,
    pub reason: String,
}

impl AssistantUnavailable {
    pub fn new(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    pub fn not_configured(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::NotConfigured, reason)
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Transport, reason)
    }

    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Status(code), reason)
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Malformed, reason)
    }
}
