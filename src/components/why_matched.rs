//! Why You Matched Component
//!
//! Ordered list of compatibility reasons plus an optional scored breakdown.
//! Each breakdown score drives a proportional bar width, and the category
//! icon lookup tolerates unrecognized keys with a default glyph.

use dioxus::prelude::*;
use kindred_core::{category_icon, MatchRationale};

#[component]
pub fn WhyYouMatched(rationale: MatchRationale) -> Element {
    rsx! {
        div { class: "why-matched",
            h3 { class: "why-matched-title", "Why you matched" }

            ul { class: "reason-list",
                for reason in rationale.reasons.iter() {
                    li { class: "reason-item", "{reason}" }
                }
            }

            if !rationale.breakdown.is_empty() {
                div { class: "breakdown-list",
                    for item in rationale.breakdown.iter() {
                        div { class: "breakdown-item",
                            span { class: "breakdown-icon", "{category_icon(item.category())}" }

                            div { class: "breakdown-detail",
                                div { class: "breakdown-head",
                                    span { class: "breakdown-category", "{item.category()}" }
                                    span { class: "breakdown-score", "{item.score()}%" }
                                }
                                div { class: "breakdown-bar",
                                    div {
                                        class: "breakdown-bar-fill",
                                        style: "width: {item.score()}%;",
                                    }
                                }
                                p { class: "breakdown-details", "{item.details()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
