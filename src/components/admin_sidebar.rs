//! Admin Sidebar Component
//!
//! Static navigation list down the left edge of the app, highlighting the
//! active section.

use dioxus::prelude::*;

use crate::app::Route;

/// Sections reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminSection {
    Dashboard,
    Profile,
    Onboarding,
    Messages,
}

impl AdminSection {
    /// All sections, in sidebar order.
    pub const ALL: [AdminSection; 4] = [
        AdminSection::Dashboard,
        AdminSection::Profile,
        AdminSection::Onboarding,
        AdminSection::Messages,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::Profile => "Profile",
            AdminSection::Onboarding => "Onboarding",
            AdminSection::Messages => "Messages",
        }
    }

    /// Get the nav glyph for this section
    pub fn icon(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "▦",
            AdminSection::Profile => "❧",
            AdminSection::Onboarding => "✎",
            AdminSection::Messages => "✉",
        }
    }

    /// Get the route for this section
    pub fn route(&self) -> Route {
        match self {
            AdminSection::Dashboard => Route::AdminDashboard {},
            AdminSection::Profile => Route::MemberProfileView {},
            AdminSection::Onboarding => Route::Onboarding {},
            AdminSection::Messages => Route::ChatView {},
        }
    }
}

#[component]
pub fn AdminSidebar(current: AdminSection) -> Element {
    rsx! {
        aside { class: "admin-sidebar",
            div { class: "sidebar-title", "Kindred" }

            nav { class: "sidebar-nav",
                for section in AdminSection::ALL {
                    Link {
                        to: section.route(),
                        class: if section == current { "sidebar-link active" } else { "sidebar-link" },

                        span { class: "sidebar-link-icon", "{section.icon()}" }
                        span { class: "sidebar-link-label", "{section.display_name()}" }
                    }
                }
            }

            div { class: "sidebar-footer", "Demo data only" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_names_distinct() {
        let names: HashSet<_> = AdminSection::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(names.len(), AdminSection::ALL.len());
    }
}
