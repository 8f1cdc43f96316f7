//! Chat components for the matchmaker conversation

mod chat_panel;
mod message_bubble;
mod message_input;

pub use chat_panel::ChatPanel;
pub use message_bubble::MessageBubble;
pub use message_input::MessageInput;
