//! Status Badge Component
//!
//! Renders the (label, icon, style) descriptor for a status tag. The
//! `FromStr` variant sits at the boundary where unchecked record data
//! enters the closed enumeration and falls back loudly on unknown input.

use dioxus::prelude::*;
use kindred_core::StatusTag;

/// Badge for a status already in the closed enumeration.
#[component]
pub fn StatusBadge(tag: StatusTag) -> Element {
    let descriptor = tag.descriptor();

    rsx! {
        span { class: "{descriptor.css_class}",
            span { class: "badge-icon", "{descriptor.icon}" }
            span { class: "badge-label", "{descriptor.label}" }
        }
    }
}

/// Badge for an unchecked status string from a record collection.
///
/// Unknown statuses render a visible fallback badge rather than nothing;
/// a silently missing badge would hide a data problem.
#[component]
pub fn StatusBadgeFromStr(raw: String) -> Element {
    match StatusTag::parse(&raw) {
        Ok(tag) => rsx! {
            StatusBadge { tag }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Record carries an unrecognized status");
            rsx! {
                span { class: "badge badge-unknown", title: "{raw}",
                    span { class: "badge-icon", "?" }
                    span { class: "badge-label", "unknown status" }
                }
            }
        }
    }
}
