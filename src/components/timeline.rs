//! Introduction Timeline Component
//!
//! Renders dated events exactly in the order the caller supplies them.
//! Each status picks its marker styling from the closed 3-way mapping;
//! the connecting line is omitted after the last event.

use dioxus::prelude::*;
use kindred_core::IntroductionEvent;

#[component]
pub fn IntroductionTimeline(events: Vec<IntroductionEvent>) -> Element {
    let count = events.len();

    rsx! {
        div { class: "timeline",
            for (index, event) in events.iter().enumerate() {
                div { class: "timeline-entry", key: "{index}",
                    div { class: "timeline-marker",
                        span { class: "{event.status.css_class()}", "{event.status.icon()}" }

                        if index + 1 < count {
                            div { class: "timeline-connector" }
                        }
                    }

                    div { class: "timeline-body",
                        span { class: "timeline-date", "{event.date}" }
                        p { class: "timeline-description", "{event.description}" }
                    }
                }
            }
        }
    }
}
