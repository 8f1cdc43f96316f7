//! Member Profile Page
//!
//! Collapsible profile sections on the left; match rationale and the
//! introduction timeline on the right. All display data is recomputed
//! from the fixtures each render; the page owns it, components only read.

use dioxus::prelude::*;
use kindred_core::directory::{sample_profile, sample_rationale, sample_timeline};

use crate::components::{
    AdminSection, AdminSidebar, IntroductionTimeline, ProfileSection, StatusBadge, WhyYouMatched,
};

#[component]
pub fn MemberProfileView() -> Element {
    let profile = sample_profile();
    let rationale = sample_rationale();
    let events = sample_timeline();

    let initial = profile.name.chars().next().unwrap_or('K');

    rsx! {
        div { class: "app-shell",
            AdminSidebar { current: AdminSection::Profile }

            main { class: "page-main",
                header { class: "profile-header",
                    div { class: "profile-avatar", "{initial}" }

                    div { class: "profile-identity",
                        h1 { class: "profile-name", "{profile.name}, {profile.age}" }
                        div { class: "profile-meta", "{profile.location}" }
                        p { class: "profile-headline", "{profile.headline}" }
                    }

                    StatusBadge { tag: profile.verification }
                }

                div { class: "profile-columns",
                    div {
                        for (index, section) in profile.sections.iter().enumerate() {
                            ProfileSection {
                                key: "{section.title}",
                                data: section.clone(),
                                collapsible: true,
                                default_open: index == 0,
                            }
                        }
                    }

                    div {
                        WhyYouMatched { rationale }
                        IntroductionTimeline { events }
                    }
                }
            }
        }
    }
}
