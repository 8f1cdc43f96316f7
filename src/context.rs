//! Shared context for the Kindred views.
//!
//! Provides the mock directory to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page component
//! let directory = use_directory();
//! let verified = directory.count_members_with(StatusTag::Verified);
//! ```

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use kindred_core::Directory;

/// Shared directory type for context.
///
/// The directory is read-only mock data, so a plain Arc is enough; no
/// component mutates it.
pub type SharedDirectory = Arc<Directory>;

/// Hook to access the directory from context.
pub fn use_directory() -> SharedDirectory {
    use_context::<SharedDirectory>()
}

/// Get the simulated matchmaker reply delay.
/// Uses the override set from command line args, if any.
pub fn reply_delay() -> Duration {
    crate::reply_delay()
}
