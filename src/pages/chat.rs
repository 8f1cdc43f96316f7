//! Chat Page
//!
//! Page-level owner of the conversation and the reply scheduler. Sends
//! append synchronously and queue one simulated matchmaker reply each;
//! the scheduler lives in this component's scope, so navigating away
//! cancels anything still pending.

use std::sync::Arc;

use dioxus::prelude::*;
use kindred_core::directory::{sample_matchmaker, sample_member};
use kindred_core::{ChatMessage, Conversation, ReplyScheduler};
use tokio::sync::RwLock;

use crate::components::messages::ChatPanel;
use crate::components::{AdminSection, AdminSidebar};
use crate::context::reply_delay;

#[component]
pub fn ChatView() -> Element {
    let conversation = use_hook(|| Arc::new(RwLock::new(Conversation::new())));
    let scheduler = use_hook(|| Arc::new(ReplyScheduler::new(reply_delay())));
    let mut messages: Signal<Vec<ChatMessage>> = use_signal(Vec::new);

    // Mirror replies appended by the scheduler into the render signal.
    // TODO: replace polling with a watch channel on the conversation
    {
        let conversation = conversation.clone();
        use_effect(move || {
            let conversation = conversation.clone();
            spawn(async move {
                loop {
                    tokio::time::sleep(std::time::Duration::from_millis(250)).await;
                    let guard = conversation.read().await;
                    if guard.len() != messages.peek().len() {
                        messages.set(guard.messages().to_vec());
                    }
                }
            });
        });
    }

    let on_send = {
        let conversation = conversation.clone();
        let scheduler = scheduler.clone();
        move |content: String| {
            let conversation = conversation.clone();
            let scheduler = scheduler.clone();
            spawn(async move {
                let mut guard = conversation.write().await;
                match guard.send(&sample_member(), &content) {
                    Ok(_) => {
                        messages.set(guard.messages().to_vec());
                        drop(guard);
                        scheduler.schedule(conversation.clone(), sample_matchmaker());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Rejected outgoing message");
                    }
                }
            });
        }
    };

    let matchmaker = sample_matchmaker();

    rsx! {
        div { class: "app-shell",
            AdminSidebar { current: AdminSection::Messages }

            main { class: "page-main",
                header { class: "page-header",
                    h1 { class: "page-title", "Your matchmaker" }
                    p { class: "page-subtitle", "{matchmaker.name} usually replies within a day" }
                }

                ChatPanel { messages: messages(), on_send }
            }
        }
    }
}
