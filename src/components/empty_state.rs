//! Empty State Components
//!
//! Maps a situational tag to icon/title/description/action via exhaustive
//! match, in a full variant for page bodies and a compact variant for
//! panels.

use dioxus::prelude::*;

/// Situations that render an empty state instead of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateKind {
    NoMembers,
    NoPayments,
    NoIntroductions,
    NoMessages,
    NoMatches,
}

impl EmptyStateKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EmptyStateKind::NoMembers => "❀",
            EmptyStateKind::NoPayments => "◆",
            EmptyStateKind::NoIntroductions => "✉",
            EmptyStateKind::NoMessages => "…",
            EmptyStateKind::NoMatches => "❧",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyStateKind::NoMembers => "No members yet",
            EmptyStateKind::NoPayments => "No payments recorded",
            EmptyStateKind::NoIntroductions => "No introductions yet",
            EmptyStateKind::NoMessages => "No messages yet",
            EmptyStateKind::NoMatches => "No matches yet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EmptyStateKind::NoMembers => "Members appear here once they finish onboarding.",
            EmptyStateKind::NoPayments => "Invoices show up here as they are issued.",
            EmptyStateKind::NoIntroductions => {
                "Introductions you propose will be tracked here."
            }
            EmptyStateKind::NoMessages => "Your matchmaker is ready when you are.",
            EmptyStateKind::NoMatches => {
                "Your matchmaker is still curating; check back soon."
            }
        }
    }

    /// Call-to-action label, for situations that have a next step.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            EmptyStateKind::NoMembers => Some("Invite a member"),
            EmptyStateKind::NoPayments => None,
            EmptyStateKind::NoIntroductions => Some("Propose an introduction"),
            EmptyStateKind::NoMessages => Some("Say hello"),
            EmptyStateKind::NoMatches => Some("Review preferences"),
        }
    }
}

/// Full empty state for page bodies.
#[component]
pub fn EmptyState(
    kind: EmptyStateKind,
    #[props(default)] on_action: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "{kind.icon()}" }
            div { class: "empty-state-title", "{kind.title()}" }
            p { class: "empty-state-description", "{kind.description()}" }

            if let Some(label) = kind.action_label() {
                button {
                    class: "empty-state-action",
                    onclick: move |_| {
                        if let Some(handler) = on_action {
                            handler.call(());
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}

/// Compact one-line variant for panels.
#[component]
pub fn EmptyStateCompact(kind: EmptyStateKind) -> Element {
    rsx! {
        div { class: "empty-state-compact",
            span { "{kind.icon()}" }
            span { "{kind.title()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [EmptyStateKind; 5] = [
        EmptyStateKind::NoMembers,
        EmptyStateKind::NoPayments,
        EmptyStateKind::NoIntroductions,
        EmptyStateKind::NoMessages,
        EmptyStateKind::NoMatches,
    ];

    #[test]
    fn test_descriptors_total_and_distinct() {
        let titles: HashSet<_> = ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles.len(), ALL.len());

        for kind in ALL {
            assert!(!kind.description().is_empty());
        }
    }
}
