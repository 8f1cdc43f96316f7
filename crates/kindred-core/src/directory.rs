//! Mock record collections behind the admin dashboard
//!
//! The admin pages consume flat record collections whose `status` fields
//! are plain strings, parsed through [`StatusTag::parse`] at the rendering
//! boundary. The counting helpers here drive the dashboard stats cards.

use serde::{Deserialize, Serialize};

use crate::chat::Sender;
use crate::types::{
    CompatibilityScore, EventStatus, IntroductionEvent, MatchRationale, MemberProfile,
    ProfileField, ProfileSectionData, StatusTag,
};

/// A member row in the admin directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub name: String,
    /// Display date the member joined ("Jan 12")
    pub joined: String,
    /// Unchecked status string, parsed at the rendering boundary
    pub status: String,
    pub plan: String,
}

/// A payment row in the admin directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub member: String,
    pub amount_cents: i64,
    /// Display due date ("Apr 1")
    pub due: String,
    pub status: String,
}

/// An introduction row in the admin directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroductionRecord {
    /// The two members being introduced
    pub pair: (String, String),
    /// Display date the introduction was proposed
    pub proposed: String,
    pub status: String,
}

/// The record collections the admin dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Directory {
    pub members: Vec<MemberRecord>,
    pub payments: Vec<PaymentRecord>,
    pub introductions: Vec<IntroductionRecord>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Members whose status parses to the given tag.
    ///
    /// Unknown status strings never match; they surface as fallback badges
    /// in the table instead.
    pub fn count_members_with(&self, tag: StatusTag) -> usize {
        self.members
            .iter()
            .filter(|m| StatusTag::parse(&m.status).map_or(false, |s| s == tag))
            .count()
    }

    /// Payments whose status parses to the given tag.
    pub fn count_payments_with(&self, tag: StatusTag) -> usize {
        self.payments
            .iter()
            .filter(|p| StatusTag::parse(&p.status).map_or(false, |s| s == tag))
            .count()
    }

    /// Introductions whose status parses to the given tag.
    pub fn count_introductions_with(&self, tag: StatusTag) -> usize {
        self.introductions
            .iter()
            .filter(|i| StatusTag::parse(&i.status).map_or(false, |s| s == tag))
            .count()
    }

    /// Sum of settled payments for the current period, in cents.
    pub fn monthly_revenue_cents(&self) -> i64 {
        self.payments
            .iter()
            .filter(|p| StatusTag::parse(&p.status) == Ok(StatusTag::Paid))
            .map(|p| p.amount_cents)
            .sum()
    }

    /// The fixed mock data set the app boots with.
    pub fn sample() -> Self {
        let member = |name: &str, joined: &str, status: &str, plan: &str| MemberRecord {
            name: name.to_string(),
            joined: joined.to_string(),
            status: status.to_string(),
            plan: plan.to_string(),
        };
        let payment = |member: &str, amount_cents: i64, due: &str, status: &str| PaymentRecord {
            member: member.to_string(),
            amount_cents,
            due: due.to_string(),
            status: status.to_string(),
        };
        let introduction = |a: &str, b: &str, proposed: &str, status: &str| IntroductionRecord {
            pair: (a.to_string(), b.to_string()),
            proposed: proposed.to_string(),
            status: status.to_string(),
        };

        Self {
            members: vec![
                member("Amelia Chen", "Jan 12", "verified", "Premium"),
                member("Marcus Webb", "Feb 3", "premium", "Premium"),
                member("Sofia Ramirez", "Feb 19", "verified", "Standard"),
                member("Theo Park", "Mar 2", "pending", "Standard"),
                member("Ingrid Larsen", "Mar 8", "flagged", "Standard"),
                member("Dana Whitfield", "Mar 21", "verified", "Premium"),
            ],
            payments: vec![
                payment("Amelia Chen", 19900, "Apr 1", "paid"),
                payment("Marcus Webb", 19900, "Apr 1", "paid"),
                payment("Sofia Ramirez", 9900, "Apr 5", "unpaid"),
                payment("Dana Whitfield", 19900, "Apr 1", "paid"),
            ],
            introductions: vec![
                introduction("Amelia Chen", "Marcus Webb", "Mar 14", "confirmed"),
                introduction("Sofia Ramirez", "Theo Park", "Mar 18", "pending"),
                introduction("Dana Whitfield", "Marcus Webb", "Mar 20", "declined"),
                introduction("Amelia Chen", "Theo Park", "Mar 25", "confirmed"),
            ],
        }
    }
}

/// The member profile the profile page boots with.
pub fn sample_profile() -> MemberProfile {
    MemberProfile {
        name: "Dana Whitfield".to_string(),
        age: 34,
        location: "Portland, OR".to_string(),
        headline: "Architect who bakes on weekends".to_string(),
        verification: StatusTag::Verified,
        sections: vec![
            ProfileSectionData::new(
                "Basics",
                vec![
                    ProfileField::text("Occupation", "Architect"),
                    ProfileField::text("Education", "M.Arch, University of Oregon"),
                    ProfileField::text("Faith", "Not religious"),
                ],
            ),
            ProfileSectionData::new(
                "Lifestyle",
                vec![
                    ProfileField::tags(
                        "Interests",
                        vec![
                            "hiking".to_string(),
                            "jazz".to_string(),
                            "baking".to_string(),
                            "film photography".to_string(),
                        ],
                    ),
                    ProfileField::text("Exercise", "A few times a week"),
                    ProfileField::text("Drinks", "Socially"),
                ],
            ),
            ProfileSectionData::new(
                "Looking for",
                vec![
                    ProfileField::text("Relationship", "Long-term partnership"),
                    ProfileField::text("Wants kids", "Open to it"),
                    ProfileField::tags(
                        "Values",
                        vec![
                            "honesty".to_string(),
                            "curiosity".to_string(),
                            "kindness".to_string(),
                        ],
                    ),
                ],
            ),
        ],
    }
}

/// The introduction timeline the profile page boots with.
pub fn sample_timeline() -> Vec<IntroductionEvent> {
    vec![
        IntroductionEvent::new(
            "Mar 14",
            "Introduction proposed by your matchmaker",
            EventStatus::Completed,
        ),
        IntroductionEvent::new("Mar 16", "Both of you accepted", EventStatus::Completed),
        IntroductionEvent::new(
            "Mar 21",
            "First date arranged — coffee at Heart Roasters",
            EventStatus::Current,
        ),
        IntroductionEvent::new(
            "Mar 28",
            "Feedback call with your matchmaker",
            EventStatus::Upcoming,
        ),
    ]
}

/// The match rationale the profile page boots with.
pub fn sample_rationale() -> MatchRationale {
    let breakdown = [
        ("values", 92, "You both put family first and plan for the long term."),
        ("lifestyle", 81, "Early risers, weekend hikers, and neither of you can cook without music on."),
        ("goals", 88, "Both settled in Portland and looking to stay."),
        ("interests", 74, "Jazz shows and farmers markets overlap; she's never tried film photography."),
    ];

    MatchRationale {
        reasons: vec![
            "You both value long-term commitment over casual dating".to_string(),
            "Shared love of the outdoors and quiet weekends".to_string(),
            "Your matchmaker noted matching senses of humor in your interviews".to_string(),
        ],
        breakdown: breakdown
            .into_iter()
            .filter_map(|(category, score, details)| {
                CompatibilityScore::new(category, score, details).ok()
            })
            .collect(),
    }
}

/// Attribution for the signed-in demo member.
pub fn sample_member() -> Sender {
    Sender::new("member-dana", "Dana", "D")
}

/// Attribution for the platform-side matchmaker.
pub fn sample_matchmaker() -> Sender {
    Sender::new("matchmaker-june", "June", "J")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        let directory = Directory::sample();

        assert_eq!(directory.count_members_with(StatusTag::Verified), 3);
        assert_eq!(directory.count_members_with(StatusTag::Pending), 1);
        assert_eq!(directory.count_members_with(StatusTag::Flagged), 1);
        assert_eq!(directory.count_payments_with(StatusTag::Unpaid), 1);
        assert_eq!(directory.count_introductions_with(StatusTag::Confirmed), 2);
    }

    #[test]
    fn test_unknown_status_never_counts() {
        let mut directory = Directory::new();
        directory.members.push(MemberRecord {
            name: "Glitch".to_string(),
            joined: "Jan 1".to_string(),
            status: "ghosted".to_string(),
            plan: "Standard".to_string(),
        });

        for tag in StatusTag::ALL {
            assert_eq!(directory.count_members_with(tag), 0);
        }
    }

    #[test]
    fn test_monthly_revenue_sums_paid_only() {
        let directory = Directory::sample();
        assert_eq!(directory.monthly_revenue_cents(), 59_700);
    }

    #[test]
    fn test_sample_statuses_all_parse() {
        let directory = Directory::sample();

        for m in &directory.members {
            assert!(StatusTag::parse(&m.status).is_ok(), "member status {}", m.status);
        }
        for p in &directory.payments {
            assert!(StatusTag::parse(&p.status).is_ok(), "payment status {}", p.status);
        }
        for i in &directory.introductions {
            assert!(StatusTag::parse(&i.status).is_ok(), "intro status {}", i.status);
        }
    }

    #[test]
    fn test_sample_rationale_scores_in_range() {
        let rationale = sample_rationale();
        assert_eq!(rationale.breakdown.len(), 4);
        for item in &rationale.breakdown {
            assert!(item.score() <= 100);
        }
    }
}
