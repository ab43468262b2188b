//! Identifiers for messages, sessions and requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fresh UUID v4 string, used to key chat messages.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Short hex id for tying together the log lines of one request.
pub fn new_correlation_id() -> String {
    let mut simple = Uuid::new_v4().simple().to_string();
    simple.truncate(8);
    simple
}

/// Identity of one conversation, shown in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First block is enough to tell sessions apart in a log.
        let hyphenated = self.0.hyphenated().to_string();
        let short = hyphenated.split('-').next().unwrap_or(&hyphenated);
        f.write_str(short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_are_v4_uuids() {
        let id = new_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(new_id(), id);
    }

    #[test]
    fn correlation_id_is_short_hex() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_displays_first_block() {
        let sid = SessionId::new();
        let shown = sid.to_string();
        assert_eq!(shown.len(), 8);
        assert!(sid.as_uuid().to_string().starts_with(&shown));
    }

    #[test]
    fn session_id_serializes_as_plain_uuid() {
        let sid = SessionId::default();
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, format!("\"{}\"", sid.as_uuid()));
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, back);
    }
}
