//! Onboarding Page
//!
//! Four-step wizard collecting the fields a matchmaker starts from. The
//! review step summarizes everything entered before finishing.

use dioxus::prelude::*;
use kindred_core::ProfileField;

use crate::app::Route;
use crate::components::{AdminSection, AdminSidebar, ProfileFieldRow};

/// Steps of the onboarding wizard, in order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum WizardStep {
    Basics,
    Preferences,
    Story,
    Review,
}

impl WizardStep {
    const ALL: [WizardStep; 4] = [
        WizardStep::Basics,
        WizardStep::Preferences,
        WizardStep::Story,
        WizardStep::Review,
    ];

    fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "The basics",
            WizardStep::Preferences => "What you're looking for",
            WizardStep::Story => "Your story",
            WizardStep::Review => "Review",
        }
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::Basics => 0,
            WizardStep::Preferences => 1,
            WizardStep::Story => 2,
            WizardStep::Review => 3,
        }
    }

    /// One-based step number for the progress dots
    fn number(&self) -> usize {
        self.index() + 1
    }

    fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => None,
            WizardStep::Preferences => Some(WizardStep::Basics),
            WizardStep::Story => Some(WizardStep::Preferences),
            WizardStep::Review => Some(WizardStep::Story),
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Basics => Some(WizardStep::Preferences),
            WizardStep::Preferences => Some(WizardStep::Story),
            WizardStep::Story => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }
}

#[component]
pub fn Onboarding() -> Element {
    let navigator = use_navigator();

    let mut step = use_signal(|| WizardStep::Basics);
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut looking_for = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut story = use_signal(String::new);

    let advance = move |_| {
        match step().next() {
            Some(next) => step.set(next),
            None => {
                // Review confirmed; hand over to the matchmaker
                tracing::info!(member = %name(), "Onboarding complete");
                navigator.push(Route::MemberProfileView {});
            }
        }
    };

    let go_back = move |_| {
        if let Some(previous) = step().back() {
            step.set(previous);
        }
    };

    let current = step();
    let continue_label = if current == WizardStep::Review {
        "Finish"
    } else {
        "Continue"
    };

    let progress: Vec<(WizardStep, &'static str)> = WizardStep::ALL
        .iter()
        .map(|s| {
            let dot_class = if *s == current {
                "wizard-step-dot active"
            } else if s.index() < current.index() {
                "wizard-step-dot done"
            } else {
                "wizard-step-dot"
            };
            (*s, dot_class)
        })
        .collect();

    rsx! {
        div { class: "app-shell",
            AdminSidebar { current: AdminSection::Onboarding }

            main { class: "page-main",
                header { class: "page-header",
                    h1 { class: "page-title", "Welcome to Kindred" }
                    p { class: "page-subtitle", "A few questions so your matchmaker knows where to start" }
                }

                div { class: "onboarding-card",
                    // Progress indicator
                    div { class: "wizard-progress",
                        for (s, dot_class) in progress {
                            div { class: "{dot_class}", "{s.number()}" }
                            if s.next().is_some() {
                                div { class: "wizard-step-bar" }
                            }
                        }
                    }

                    h2 { class: "wizard-step-title", "{current.title()}" }

                    match current {
                        WizardStep::Basics => rsx! {
                            div { class: "form-field",
                                label { class: "form-label", "Name" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    value: "{name}",
                                    oninput: move |e| name.set(e.value()),
                                }
                            }
                            div { class: "form-field",
                                label { class: "form-label", "Age" }
                                input {
                                    class: "form-input",
                                    r#type: "number",
                                    value: "{age}",
                                    oninput: move |e| age.set(e.value()),
                                }
                            }
                            div { class: "form-field",
                                label { class: "form-label", "Location" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    value: "{location}",
                                    oninput: move |e| location.set(e.value()),
                                }
                            }
                        },
                        WizardStep::Preferences => rsx! {
                            div { class: "form-field",
                                label { class: "form-label", "Looking for" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    value: "{looking_for}",
                                    oninput: move |e| looking_for.set(e.value()),
                                }
                                p { class: "form-hint", "e.g. a long-term partnership" }
                            }
                            div { class: "form-field",
                                label { class: "form-label", "Interests" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    value: "{interests}",
                                    oninput: move |e| interests.set(e.value()),
                                }
                                p { class: "form-hint", "Separate with commas" }
                            }
                        },
                        WizardStep::Story => rsx! {
                            div { class: "form-field",
                                label { class: "form-label", "In your own words" }
                                textarea {
                                    class: "form-textarea",
                                    value: "{story}",
                                    oninput: move |e| story.set(e.value()),
                                }
                                p { class: "form-hint",
                                    "Your matchmaker reads this before your first call."
                                }
                            }
                        },
                        WizardStep::Review => rsx! {
                            ProfileFieldRow { field: ProfileField::text("Name", name()) }
                            ProfileFieldRow { field: ProfileField::text("Age", age()) }
                            ProfileFieldRow { field: ProfileField::text("Location", location()) }
                            ProfileFieldRow { field: ProfileField::text("Looking for", looking_for()) }
                            ProfileFieldRow {
                                field: ProfileField::tags(
                                    "Interests",
                                    interests()
                                        .split(',')
                                        .map(|t| t.trim().to_string())
                                        .filter(|t| !t.is_empty())
                                        .collect(),
                                )
                            }
                            ProfileFieldRow { field: ProfileField::text("Story", story()) }
                        },
                    }

                    div { class: "wizard-controls",
                        button {
                            class: "btn-back",
                            disabled: current.back().is_none(),
                            onclick: go_back,
                            "Back"
                        }
                        button { class: "btn-continue", onclick: advance, "{continue_label}" }
                    }
                }
            }
        }
    }
}
