//! Message Input Component
//!
//! Input bar at the bottom of the chat panel. Sends on button click or
//! Enter (Shift+Enter inserts a newline), rejects blank drafts, and
//! disables itself briefly while a send is in flight.

use dioxus::prelude::*;

#[component]
pub fn MessageInput(
    /// Handler called with the draft content on send
    on_send: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Message your matchmaker...".to_string())]
    placeholder: String,
    /// Whether input is disabled by the parent
    #[props(default = false)]
    disabled: bool,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let mut submit = move || {
        let content = draft();
        if content.trim().is_empty() || sending() {
            return;
        }

        sending.set(true);
        on_send.call(content);
        draft.set(String::new());

        // Brief cooldown so a double Enter doesn't send twice
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(120)).await;
            sending.set(false);
        });
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            submit();
        }
    };

    let is_disabled = disabled || sending();
    let can_send = !draft().trim().is_empty() && !is_disabled;

    rsx! {
        div { class: "message-input-bar",
            textarea {
                class: "message-textarea",
                placeholder: "{placeholder}",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
                onkeydown: handle_keydown,
                disabled: is_disabled,
                rows: 1,
            }

            button {
                class: if can_send { "message-send-btn active" } else { "message-send-btn" },
                onclick: move |_| submit(),
                disabled: !can_send,
                title: "Send message (Enter)",
                "Send"
            }
        }
    }
}
