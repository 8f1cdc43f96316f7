//! Append-only conversation owned by the chat page
//!
//! A [`Conversation`] holds the message sequence in insertion order. The
//! page-level container owns it; display components only read it.

use crate::error::{CoreError, CoreResult};

use super::message::{ChatMessage, Sender};

/// The message history between a member and their matchmaker.
///
/// Messages are kept in insertion order. Duplicates (same id) are ignored.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Create a new empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Duplicates (same id) are ignored; order is never
    /// changed after insertion.
    pub fn push(&mut self, message: ChatMessage) {
        if self.messages.iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.push(message);
    }

    /// Compose and append a member-authored message, synchronously.
    ///
    /// Content is trimmed; blank content is rejected. Returns the appended
    /// message so the caller can log or echo it.
    pub fn send(&mut self, sender: &Sender, content: &str) -> CoreResult<ChatMessage> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyMessage);
        }

        let message = ChatMessage::new(sender, trimmed, false);
        tracing::info!(sender = %sender.name, id = %message.id, "Message sent");
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Get all messages in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Get the number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the conversation is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the most recent message, if any.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Matchmaker messages newer than the member's last message.
    ///
    /// This is the heuristic behind the chat nav badge: anything the
    /// matchmaker said after the member last spoke counts as unread.
    pub fn unread_count(&self) -> usize {
        let last_member_time = self
            .messages
            .iter()
            .filter(|m| !m.from_matchmaker)
            .map(|m| m.timestamp)
            .max();

        match last_member_time {
            Some(cutoff) => self
                .messages
                .iter()
                .filter(|m| m.from_matchmaker && m.timestamp > cutoff)
                .count(),
            None => self.messages.iter().filter(|m| m.from_matchmaker).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn member() -> Sender {
        Sender::new("member-1", "Dana", "D")
    }

    fn matchmaker() -> Sender {
        Sender::new("mm-1", "June", "J")
    }

    #[test]
    fn test_send_appends_synchronously() {
        let mut convo = Conversation::new();

        let sent = convo.send(&member(), "hello").expect("send should succeed");

        assert_eq!(convo.len(), 1);
        assert_eq!(convo.messages()[0].content, "hello");
        assert_eq!(convo.messages()[0].id, sent.id);
        assert!(!sent.from_matchmaker);
    }

    #[test]
    fn test_send_trims_content() {
        let mut convo = Conversation::new();
        let sent = convo.send(&member(), "  hi there  ").expect("send should succeed");
        assert_eq!(sent.content, "hi there");
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut convo = Conversation::new();
        assert_eq!(convo.send(&member(), "   "), Err(CoreError::EmptyMessage));
        assert!(convo.is_empty());
    }

    #[test]
    fn test_duplicate_ids_ignored() {
        let mut convo = Conversation::new();
        let msg = ChatMessage::new(&member(), "once", false);

        convo.push(msg.clone());
        convo.push(msg);

        assert_eq!(convo.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut convo = Conversation::new();

        // Backdated message pushed second still renders second.
        let first = ChatMessage::new(&member(), "first", false);
        let mut second = ChatMessage::new(&matchmaker(), "second", true);
        second.timestamp = Utc::now() - Duration::hours(1);

        convo.push(first);
        convo.push(second);

        assert_eq!(convo.messages()[0].content, "first");
        assert_eq!(convo.messages()[1].content, "second");
    }

    #[test]
    fn test_last_message() {
        let mut convo = Conversation::new();
        assert!(convo.last_message().is_none());

        convo.send(&member(), "first").expect("send");
        convo.send(&member(), "last").expect("send");

        assert_eq!(
            convo.last_message().map(|m| m.content.as_str()),
            Some("last")
        );
    }

    fn at_minutes_ago(sender: &Sender, content: &str, minutes: i64, from_matchmaker: bool) -> ChatMessage {
        let mut msg = ChatMessage::new(sender, content, from_matchmaker);
        msg.timestamp = Utc::now() - Duration::minutes(minutes);
        msg
    }

    #[test]
    fn test_unread_count() {
        let mut convo = Conversation::new();
        assert_eq!(convo.unread_count(), 0);

        // Matchmaker speaks first: everything is unread.
        convo.push(at_minutes_ago(&matchmaker(), "Welcome to Kindred!", 30, true));
        assert_eq!(convo.unread_count(), 1);

        // Member replies: counter resets.
        convo.push(at_minutes_ago(&member(), "Thanks!", 20, false));
        assert_eq!(convo.unread_count(), 0);

        convo.push(at_minutes_ago(&matchmaker(), "I found someone.", 10, true));
        convo.push(at_minutes_ago(&matchmaker(), "Free this weekend?", 5, true));
        assert_eq!(convo.unread_count(), 2);
    }
}
