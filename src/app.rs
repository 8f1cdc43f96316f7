use std::sync::Arc;

use dioxus::prelude::*;
use kindred_core::Directory;

use crate::context::SharedDirectory;
use crate::pages::{AdminDashboard, ChatView, Landing, MemberProfileView, Onboarding};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/admin` - Admin dashboard over the member directory
/// - `/onboarding` - New-member wizard
/// - `/profile` - Member profile with match rationale and timeline
/// - `/chat` - Conversation with the matchmaker
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/profile")]
    MemberProfileView {},
    #[route("/chat")]
    ChatView {},
}

/// Root application component.
///
/// Provides global styles, the shared directory, and routing.
#[component]
pub fn App() -> Element {
    // The mock directory every page reads from
    use_context_provider::<SharedDirectory>(|| Arc::new(Directory::sample()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
