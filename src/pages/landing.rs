//! Landing page - Entry point to Kindred.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "app-title", "Kindred" }
                p { class: "tagline", "Matchmaking with a human touch" }

                button {
                    class: "btn-enter",
                    onclick: move |_| {
                        navigator.push(Route::MemberProfileView {});
                    },
                    "See your match"
                }

                div { class: "landing-links",
                    Link { class: "landing-link", to: Route::AdminDashboard {}, "Admin console" }
                    Link { class: "landing-link", to: Route::Onboarding {}, "Start onboarding" }
                }
            }

            section { class: "vision-section",
                p {
                    "Every introduction on Kindred is curated by a real matchmaker. "
                    "No swiping, no feeds. Just a handful of thoughtful matches and "
                    "someone in your corner while you meet them."
                }
            }
        }
    }
}
