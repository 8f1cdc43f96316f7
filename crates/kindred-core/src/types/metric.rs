//! Dashboard metrics and trend classification
//!
//! A [`Metric`] is a labeled, pre-formatted value with an optional trend
//! delta. The sign of the delta picks one of three mutually exclusive
//! display styles; an absent delta suppresses the trend row entirely,
//! which is distinct from a zero delta (neutral "0%").

use serde::{Deserialize, Serialize};

/// A labeled metric for a stats card.
///
/// The value is pre-formatted by the caller ("248", "$12,400", "87%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Card title ("Active Members")
    pub title: String,
    /// Pre-formatted display value
    pub value: String,
    /// Signed trend percentage vs. the previous period, if tracked
    pub trend: Option<f64>,
}

impl Metric {
    /// Create a metric with no trend row.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend: None,
        }
    }

    /// Create a metric with a trend delta.
    pub fn with_trend(title: impl Into<String>, value: impl Into<String>, trend: f64) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend: Some(trend),
        }
    }

    /// Classify the trend, if the metric has one.
    ///
    /// `None` means "no trend tracked", not "flat".
    pub fn trend_direction(&self) -> Option<TrendDirection> {
        self.trend.map(TrendDirection::from_delta)
    }
}

/// Sign classification for a trend delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Positive,
    Negative,
    Neutral,
}

impl TrendDirection {
    /// Classify a delta by sign comparison against zero.
    ///
    /// Exactly zero is neutral. Non-finite deltas also classify neutral
    /// since neither comparison holds.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            TrendDirection::Positive
        } else if delta < 0.0 {
            TrendDirection::Negative
        } else {
            TrendDirection::Neutral
        }
    }

    /// Get the CSS class for the trend row.
    pub fn css_class(&self) -> &'static str {
        match self {
            TrendDirection::Positive => "stat-trend trend-positive",
            TrendDirection::Negative => "stat-trend trend-negative",
            TrendDirection::Neutral => "stat-trend trend-neutral",
        }
    }
}

/// Format a trend delta for display.
///
/// Positive deltas get a leading `+`, negatives keep the sign the number
/// carries, and zero renders as a bare "0%". One decimal place, trimmed
/// when whole.
pub fn format_trend(delta: f64) -> String {
    if delta == 0.0 {
        return "0%".to_string();
    }
    let magnitude = format!("{:.1}", delta);
    let magnitude = magnitude.strip_suffix(".0").unwrap_or(&magnitude);
    if delta > 0.0 {
        format!("+{}%", magnitude)
    } else {
        format!("{}%", magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(TrendDirection::from_delta(12.5), TrendDirection::Positive);
        assert_eq!(TrendDirection::from_delta(-3.0), TrendDirection::Negative);
        assert_eq!(TrendDirection::from_delta(0.0), TrendDirection::Neutral);
    }

    #[test]
    fn test_nan_classifies_neutral() {
        assert_eq!(TrendDirection::from_delta(f64::NAN), TrendDirection::Neutral);
    }

    #[test]
    fn test_missing_trend_has_no_direction() {
        let metric = Metric::new("Active Members", "248");
        assert_eq!(metric.trend_direction(), None);
    }

    #[test]
    fn test_zero_trend_is_neutral_not_missing() {
        let metric = Metric::with_trend("Active Members", "248", 0.0);
        assert_eq!(metric.trend_direction(), Some(TrendDirection::Neutral));
        assert_eq!(format_trend(0.0), "0%");
    }

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(12.5), "+12.5%");
        assert_eq!(format_trend(8.0), "+8%");
        assert_eq!(format_trend(-3.0), "-3%");
        assert_eq!(format_trend(-0.5), "-0.5%");
    }

    proptest! {
        #[test]
        fn prop_positive_deltas_get_plus_prefix(delta in 0.1f64..10_000.0) {
            prop_assert_eq!(TrendDirection::from_delta(delta), TrendDirection::Positive);
            prop_assert!(format_trend(delta).starts_with('+'));
        }

        #[test]
        fn prop_negative_deltas_keep_minus_sign(delta in -10_000.0f64..-0.1) {
            prop_assert_eq!(TrendDirection::from_delta(delta), TrendDirection::Negative);
            prop_assert!(format_trend(delta).starts_with('-'));
        }
    }
}
