//! Admin Dashboard Page
//!
//! Stats cards computed by counting the directory collections, the recent
//! members table, and payments/introductions panels. Every status cell
//! goes through the parsing badge, so a bad record shows up as a visible
//! fallback instead of a blank.

use dioxus::prelude::*;
use kindred_core::{Metric, StatusTag};

use crate::components::{
    AdminSection, AdminSidebar, EmptyState, EmptyStateCompact, EmptyStateKind, StatsCard,
    StatusBadgeFromStr,
};
use crate::context::use_directory;

/// Format cents as a dollar amount for display
fn format_dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

#[component]
pub fn AdminDashboard() -> Element {
    let directory = use_directory();

    let metrics = [
        Metric::with_trend("Active members", directory.members.len().to_string(), 12.5),
        Metric::with_trend(
            "Verified",
            directory.count_members_with(StatusTag::Verified).to_string(),
            8.0,
        ),
        Metric::with_trend(
            "Monthly revenue",
            format_dollars(directory.monthly_revenue_cents()),
            -3.0,
        ),
        Metric::new(
            "Pending introductions",
            directory
                .count_introductions_with(StatusTag::Pending)
                .to_string(),
        ),
    ];

    rsx! {
        div { class: "app-shell",
            AdminSidebar { current: AdminSection::Dashboard }

            main { class: "page-main",
                header { class: "page-header",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "A morning look at the membership" }
                }

                div { class: "stats-row",
                    for metric in metrics {
                        StatsCard { metric }
                    }
                }

                div { class: "panel",
                    h2 { class: "panel-title", "Members" }

                    if directory.members.is_empty() {
                        EmptyState { kind: EmptyStateKind::NoMembers }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Joined" }
                                    th { "Plan" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for member in directory.members.iter() {
                                    tr { key: "{member.name}",
                                        td { "{member.name}" }
                                        td { class: "table-secondary", "{member.joined}" }
                                        td { class: "table-secondary", "{member.plan}" }
                                        td {
                                            StatusBadgeFromStr { raw: member.status.clone() }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "panel-grid",
                    div { class: "panel",
                        h2 { class: "panel-title", "Payments" }

                        if directory.payments.is_empty() {
                            EmptyStateCompact { kind: EmptyStateKind::NoPayments }
                        } else {
                            table { class: "data-table",
                                tbody {
                                    for payment in directory.payments.iter() {
                                        tr { key: "{payment.member}",
                                            td { "{payment.member}" }
                                            td { class: "table-secondary",
                                                "{format_dollars(payment.amount_cents)}"
                                            }
                                            td { class: "table-secondary", "due {payment.due}" }
                                            td {
                                                StatusBadgeFromStr { raw: payment.status.clone() }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "panel",
                        h2 { class: "panel-title", "Introductions" }

                        if directory.introductions.is_empty() {
                            EmptyStateCompact { kind: EmptyStateKind::NoIntroductions }
                        } else {
                            table { class: "data-table",
                                tbody {
                                    for (index, intro) in directory.introductions.iter().enumerate() {
                                        tr { key: "{index}",
                                            td { {format!("{} & {}", intro.pair.0, intro.pair.1)} }
                                            td { class: "table-secondary", "{intro.proposed}" }
                                            td {
                                                StatusBadgeFromStr { raw: intro.status.clone() }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
