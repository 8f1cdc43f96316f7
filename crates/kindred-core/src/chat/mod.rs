//! Chat between a member and their matchmaker
//!
//! This module holds the conversation flow behind the chat view:
//!
//! - [`ChatMessage`]: display-ready message record with attribution
//! - [`Conversation`]: append-only message sequence owned by the page
//! - [`ReplyScheduler`]: delayed simulated matchmaker replies
//!
//! # Message Flow
//!
//! **Sending:**
//! 1. The chat page calls [`Conversation::send`] with the member's input
//! 2. A member-authored message is appended synchronously
//! 3. [`ReplyScheduler::schedule`] queues one simulated reply
//!
//! **Replying:**
//! 1. After the fixed delay, the reply task picks a canned response
//! 2. A matchmaker-authored message is appended to the conversation
//! 3. Pending replies are aborted if the scheduler is dropped first

mod conversation;
mod message;
mod responder;

pub use conversation::Conversation;
pub use message::{ChatMessage, MessageId, Sender};
pub use responder::{ReplyScheduler, CANNED_REPLIES, DEFAULT_REPLY_DELAY};
