//! Introduction timeline events
//!
//! An introduction is tracked as an ordered sequence of dated events. The
//! sequence is rendered exactly as the caller supplies it: no sorting, no
//! filtering, and no check that statuses progress monotonically.

use serde::{Deserialize, Serialize};

/// Three-way status of a timeline event, driving icon and connector styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Step already happened
    Completed,
    /// The step the introduction is currently at
    Current,
    /// Step not yet reached
    Upcoming,
}

impl EventStatus {
    /// Get the marker glyph for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            EventStatus::Completed => "✓",
            EventStatus::Current => "●",
            EventStatus::Upcoming => "○",
        }
    }

    /// Get the CSS class for the marker.
    pub fn css_class(&self) -> &'static str {
        match self {
            EventStatus::Completed => "timeline-dot completed",
            EventStatus::Current => "timeline-dot current",
            EventStatus::Upcoming => "timeline-dot upcoming",
        }
    }
}

/// One dated step in an introduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroductionEvent {
    /// Display date ("Mar 14"); pre-formatted by the caller
    pub date: String,
    pub description: String,
    pub status: EventStatus,
}

impl IntroductionEvent {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        status: EventStatus,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [EventStatus; 3] = [
        EventStatus::Completed,
        EventStatus::Current,
        EventStatus::Upcoming,
    ];

    #[test]
    fn test_three_distinct_marker_states() {
        let icons: HashSet<_> = ALL.iter().map(|s| s.icon()).collect();
        assert_eq!(icons.len(), 3);

        let classes: HashSet<_> = ALL.iter().map(|s| s.css_class()).collect();
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_event_construction() {
        let event = IntroductionEvent::new("Mar 14", "First coffee date", EventStatus::Completed);
        assert_eq!(event.date, "Mar 14");
        assert_eq!(event.status, EventStatus::Completed);
    }
}
