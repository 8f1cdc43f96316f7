//! Kindred Core Library
//!
//! Display contracts, chat engine, and mock data for the Kindred
//! matchmaking desktop app.
//!
//! ## Overview
//!
//! Kindred's desktop binary is a pure presentation layer: admin dashboard,
//! onboarding wizard, member profile, and matchmaker chat, all rendered
//! from in-memory data. This crate holds everything under those views:
//!
//! - **Display contracts**: status tags with exhaustive descriptor maps,
//!   metrics with trend classification, profile/timeline/rationale records
//! - **Chat engine**: append-only conversation with simulated, cancellable
//!   matchmaker replies
//! - **Mock directory**: the record collections and fixtures the app boots
//!   with
//!
//! ## Quick Start
//!
//! ```
//! use kindred_core::{Conversation, Directory, StatusTag};
//!
//! let directory = Directory::sample();
//! let verified = directory.count_members_with(StatusTag::Verified);
//! assert!(verified > 0);
//!
//! let mut conversation = Conversation::new();
//! conversation
//!     .send(&kindred_core::directory::sample_member(), "Hello!")
//!     .expect("content is not blank");
//! assert_eq!(conversation.len(), 1);
//! ```

pub mod chat;
pub mod directory;
pub mod error;
pub mod types;

// Re-exports
pub use chat::{ChatMessage, Conversation, MessageId, ReplyScheduler, Sender, CANNED_REPLIES, DEFAULT_REPLY_DELAY};
pub use directory::{Directory, IntroductionRecord, MemberRecord, PaymentRecord};
pub use error::{CoreError, CoreResult};
pub use types::*;
