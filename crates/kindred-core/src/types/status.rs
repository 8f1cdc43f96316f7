//! Status tags and their display descriptors
//!
//! Every record collection in Kindred (members, payments, introductions)
//! carries a status drawn from one closed enumeration. The mapping from tag
//! to display descriptor is an exhaustive match, so a new tag cannot be
//! added without also deciding how it renders.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Closed set of status tags used across member, payment, and
/// introduction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    /// Identity checks passed
    Verified,
    /// Awaiting verification or confirmation
    Pending,
    /// Paying premium member
    Premium,
    /// Flagged for moderator review
    Flagged,
    /// Invoice settled
    Paid,
    /// Invoice outstanding
    Unpaid,
    /// Introduction accepted by both parties
    Confirmed,
    /// Introduction declined
    Declined,
}

/// Display descriptor for a status tag: label, icon glyph, and CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub icon: &'static str,
    pub css_class: &'static str,
}

impl StatusTag {
    /// All tags, for totality checks and admin filter menus.
    pub const ALL: [StatusTag; 8] = [
        StatusTag::Verified,
        StatusTag::Pending,
        StatusTag::Premium,
        StatusTag::Flagged,
        StatusTag::Paid,
        StatusTag::Unpaid,
        StatusTag::Confirmed,
        StatusTag::Declined,
    ];

    /// Get the display descriptor for this tag.
    pub fn descriptor(&self) -> StatusDescriptor {
        match self {
            StatusTag::Verified => StatusDescriptor {
                label: "Verified",
                icon: "✓",
                css_class: "badge badge-verified",
            },
            StatusTag::Pending => StatusDescriptor {
                label: "Pending",
                icon: "◌",
                css_class: "badge badge-pending",
            },
            StatusTag::Premium => StatusDescriptor {
                label: "Premium",
                icon: "★",
                css_class: "badge badge-premium",
            },
            StatusTag::Flagged => StatusDescriptor {
                label: "Flagged",
                icon: "⚑",
                css_class: "badge badge-flagged",
            },
            StatusTag::Paid => StatusDescriptor {
                label: "Paid",
                icon: "◆",
                css_class: "badge badge-paid",
            },
            StatusTag::Unpaid => StatusDescriptor {
                label: "Unpaid",
                icon: "◇",
                css_class: "badge badge-unpaid",
            },
            StatusTag::Confirmed => StatusDescriptor {
                label: "Confirmed",
                icon: "✦",
                css_class: "badge badge-confirmed",
            },
            StatusTag::Declined => StatusDescriptor {
                label: "Declined",
                icon: "✕",
                css_class: "badge badge-declined",
            },
        }
    }

    /// Parse a status string from an unchecked external record.
    ///
    /// Record collections arrive with plain string status fields; this is
    /// the boundary where they enter the closed enumeration. Unknown input
    /// is an error, and the rendering layer must show a visible fallback
    /// rather than dropping the badge.
    pub fn parse(input: &str) -> CoreResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(StatusTag::Verified),
            "pending" => Ok(StatusTag::Pending),
            "premium" => Ok(StatusTag::Premium),
            "flagged" => Ok(StatusTag::Flagged),
            "paid" => Ok(StatusTag::Paid),
            "unpaid" => Ok(StatusTag::Unpaid),
            "confirmed" => Ok(StatusTag::Confirmed),
            "declined" => Ok(StatusTag::Declined),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }

    /// Get the display label for this tag.
    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }

    /// Get the icon glyph for this tag.
    pub fn icon(&self) -> &'static str {
        self.descriptor().icon
    }

    /// Get the CSS class for this tag.
    pub fn css_class(&self) -> &'static str {
        self.descriptor().css_class
    }
}

impl std::fmt::Display for StatusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_descriptor_total_over_enumeration() {
        for tag in StatusTag::ALL {
            let d = tag.descriptor();
            assert!(!d.label.is_empty());
            assert!(!d.icon.is_empty());
            assert!(d.css_class.starts_with("badge "));
        }
    }

    #[test]
    fn test_descriptors_are_distinct() {
        let labels: HashSet<_> = StatusTag::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), StatusTag::ALL.len());

        let classes: HashSet<_> = StatusTag::ALL.iter().map(|t| t.css_class()).collect();
        assert_eq!(classes.len(), StatusTag::ALL.len());
    }

    #[test]
    fn test_parse_roundtrip() {
        for tag in StatusTag::ALL {
            let parsed = StatusTag::parse(&tag.label().to_lowercase()).expect("should parse");
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(StatusTag::parse(" Premium "), Ok(StatusTag::Premium));
        assert_eq!(StatusTag::parse("VERIFIED"), Ok(StatusTag::Verified));
    }

    #[test]
    fn test_parse_unknown_is_loud() {
        let err = StatusTag::parse("ghosted").unwrap_err();
        assert_eq!(err, CoreError::UnknownStatus("ghosted".to_string()));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", StatusTag::Flagged), "Flagged");
    }
}
