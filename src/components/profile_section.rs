//! Collapsible Profile Section Component
//!
//! A labeled container of profile field rows. Each section instance owns
//! its own open/collapsed state; toggling one never affects another. When
//! not collapsible, the section is fixed open and no toggle is rendered.

use dioxus::prelude::*;
use kindred_core::{FieldValue, ProfileField, ProfileSectionData, SectionState};

#[component]
pub fn ProfileSection(
    data: ProfileSectionData,
    #[props(default = true)] collapsible: bool,
    #[props(default = true)] default_open: bool,
) -> Element {
    let mut state = use_signal(move || SectionState::from_open(default_open));
    let is_open = !collapsible || state().is_open();

    let chevron_class = if is_open {
        "section-chevron open"
    } else {
        "section-chevron"
    };

    rsx! {
        section { class: "profile-section",
            if collapsible {
                button {
                    class: "profile-section-header",
                    onclick: move |_| state.with_mut(|s| s.toggle()),
                    "aria-expanded": "{is_open}",

                    h3 { class: "section-title", "{data.title}" }
                    span { class: "{chevron_class}", "▾" }
                }
            } else {
                div { class: "profile-section-header static",
                    h3 { class: "section-title", "{data.title}" }
                }
            }

            if is_open {
                div { class: "profile-section-body",
                    for field in data.fields.iter() {
                        ProfileFieldRow { field: field.clone() }
                    }
                }
            }
        }
    }
}

/// A single label-value row; the value is a scalar or an ordered tag list.
#[component]
pub fn ProfileFieldRow(field: ProfileField) -> Element {
    rsx! {
        div { class: "profile-field",
            span { class: "field-label", "{field.label}" }

            match &field.value {
                FieldValue::Text(text) => rsx! {
                    span { class: "field-value", "{text}" }
                },
                FieldValue::Tags(tags) => rsx! {
                    div { class: "field-tags",
                        for tag in tags.iter() {
                            span { class: "field-tag", "{tag}" }
                        }
                    }
                },
            }
        }
    }
}
