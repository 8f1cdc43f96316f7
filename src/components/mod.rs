//! UI Components for Kindred.

pub mod messages;

mod admin_sidebar;
mod empty_state;
mod profile_section;
mod stats_card;
mod status_badge;
mod timeline;
mod why_matched;

pub use admin_sidebar::{AdminSection, AdminSidebar};
pub use empty_state::{EmptyState, EmptyStateCompact, EmptyStateKind};
pub use profile_section::{ProfileFieldRow, ProfileSection};
pub use stats_card::StatsCard;
pub use status_badge::{StatusBadge, StatusBadgeFromStr};
pub use timeline::IntroductionTimeline;
pub use why_matched::WhyYouMatched;
