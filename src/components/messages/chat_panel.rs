//! Chat Panel Component
//!
//! Message list plus input bar. The panel only reads the message
//! sequence; the page-level container owns it and handles sends.

use dioxus::prelude::*;
use kindred_core::ChatMessage;

use super::message_bubble::MessageBubble;
use super::message_input::MessageInput;
use crate::components::{EmptyState, EmptyStateKind};

#[component]
pub fn ChatPanel(
    /// Messages in insertion order
    messages: Vec<ChatMessage>,
    /// Handler for sending a draft
    on_send: EventHandler<String>,
    /// Whether a send is in flight
    #[props(default = false)]
    sending: bool,
) -> Element {
    rsx! {
        div { class: "chat-panel",
            div { class: "chat-messages",
                if messages.is_empty() {
                    EmptyState { kind: EmptyStateKind::NoMessages }
                } else {
                    for msg in messages.iter() {
                        MessageBubble { key: "{msg.id}", message: msg.clone() }
                    }
                }
            }

            MessageInput { on_send, disabled: sending }
        }
    }
}
