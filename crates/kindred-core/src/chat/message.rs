//! Chat message types for the member/matchmaker conversation
//!
//! A [`ChatMessage`] is a display-ready record with resolved sender
//! information. Its serialized form is the camelCase record shape the rest
//! of the platform exchanges, with an RFC 3339 timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a chat message
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Ulid);

impl MessageId {
    /// Create a new MessageId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg_{}", self.0)
    }
}

/// Attribution for composing messages: who a message is from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub id: String,
    pub name: String,
    /// Avatar glyph or image URI
    pub avatar: String,
}

impl Sender {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A display-ready chat message.
///
/// Serializes to the platform record shape:
/// `{id, senderId, senderName, senderAvatar, content, timestamp,
/// isFromMatchmaker}` with an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Whether the platform-side matchmaker sent this, as opposed to the member
    #[serde(rename = "isFromMatchmaker")]
    pub from_matchmaker: bool,
}

impl ChatMessage {
    /// Compose a message from a sender with a fresh id and the current time.
    pub fn new(sender: &Sender, content: &str, from_matchmaker: bool) -> Self {
        Self {
            id: MessageId::new(),
            sender_id: sender.id.clone(),
            sender_name: sender.name.clone(),
            sender_avatar: sender.avatar.clone(),
            content: content.to_string(),
            timestamp: Utc::now(),
            from_matchmaker,
        }
    }

    /// Format the timestamp as a relative time string.
    ///
    /// Returns strings like "Just now", "5m ago", "2h ago", "Yesterday".
    pub fn time_label(&self) -> String {
        let diff_secs = (Utc::now() - self.timestamp).num_seconds();

        if diff_secs < 60 {
            "Just now".to_string()
        } else if diff_secs < 3600 {
            format!("{}m ago", diff_secs / 60)
        } else if diff_secs < 86400 {
            format!("{}h ago", diff_secs / 3600)
        } else if diff_secs < 172800 {
            "Yesterday".to_string()
        } else {
            format!("{}d ago", diff_secs / 86400)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sender() -> Sender {
        Sender::new("member-1", "Dana", "D")
    }

    #[test]
    fn test_message_composition() {
        let msg = ChatMessage::new(&test_sender(), "Hello!", false);

        assert_eq!(msg.sender_id, "member-1");
        assert_eq!(msg.sender_name, "Dana");
        assert_eq!(msg.content, "Hello!");
        assert!(!msg.from_matchmaker);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = ChatMessage::new(&test_sender(), "one", false);
        let b = ChatMessage::new(&test_sender(), "two", false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_id_display() {
        let id = MessageId::new();
        assert!(id.to_string().starts_with("msg_"));
    }

    #[test]
    fn test_recent_message_is_just_now() {
        let msg = ChatMessage::new(&test_sender(), "hi", false);
        assert_eq!(msg.time_label(), "Just now");
    }

    #[test]
    fn test_older_time_labels() {
        let mut msg = ChatMessage::new(&test_sender(), "hi", false);

        msg.timestamp = Utc::now() - chrono::Duration::minutes(5);
        assert_eq!(msg.time_label(), "5m ago");

        msg.timestamp = Utc::now() - chrono::Duration::hours(2);
        assert_eq!(msg.time_label(), "2h ago");

        msg.timestamp = Utc::now() - chrono::Duration::hours(30);
        assert_eq!(msg.time_label(), "Yesterday");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let msg = ChatMessage::new(&Sender::new("mm-1", "June", "J"), "Welcome!", true);
        let value = serde_json::to_value(&msg).expect("message should serialize");

        for key in [
            "id",
            "senderId",
            "senderName",
            "senderAvatar",
            "content",
            "timestamp",
            "isFromMatchmaker",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(value["isFromMatchmaker"], serde_json::json!(true));
    }

    #[test]
    fn test_timestamp_serializes_as_rfc3339() {
        let msg = ChatMessage::new(&test_sender(), "hi", false);
        let value = serde_json::to_value(&msg).expect("message should serialize");

        let raw = value["timestamp"].as_str().expect("timestamp should be a string");
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }

    #[test]
    fn test_wire_roundtrip() {
        let msg = ChatMessage::new(&test_sender(), "roundtrip", false);
        let json = serde_json::to_string(&msg).expect("serialize");
        let back: ChatMessage = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, msg);
    }
}
