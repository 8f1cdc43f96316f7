//! Message Bubble Component
//!
//! Chat-style bubbles with visual distinction between the member's own
//! messages and the matchmaker's.

use dioxus::prelude::*;
use kindred_core::ChatMessage;

/// Individual message bubble.
///
/// Member messages align right; matchmaker messages align left with the
/// matchmaker's avatar and name.
#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let row_class = if message.from_matchmaker {
        "message-row message-row-received"
    } else {
        "message-row message-row-sent"
    };

    let bubble_class = if message.from_matchmaker {
        "message-bubble message-bubble-received"
    } else {
        "message-bubble message-bubble-sent"
    };

    rsx! {
        div { class: "{row_class}",
            if message.from_matchmaker {
                div { class: "message-avatar", "{message.sender_avatar}" }
            }

            div { class: "{bubble_class}",
                if message.from_matchmaker {
                    div { class: "message-sender", "{message.sender_name}" }
                }

                div { class: "message-content", "{message.content}" }
                div { class: "message-time", "{message.time_label()}" }
            }
        }
    }
}
