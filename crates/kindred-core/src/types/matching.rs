//! Compatibility rationale shown on the profile page
//!
//! A match rationale is a list of free-text reasons plus an optional
//! per-category score breakdown. Scores are validated into 0..=100 at
//! construction; the proportional bar width can then use the score
//! directly as a percentage.

use crate::error::{CoreError, CoreResult};

/// A per-category compatibility score with explanatory text.
///
/// The score is kept private so every instance went through range
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityScore {
    category: String,
    score: u8,
    details: String,
}

impl CompatibilityScore {
    /// Create a score, validating the 0..=100 range at the boundary.
    ///
    /// Out-of-range input is rejected rather than clamped, so a bad
    /// upstream value surfaces instead of rendering a misleading bar.
    pub fn new(
        category: impl Into<String>,
        score: u8,
        details: impl Into<String>,
    ) -> CoreResult<Self> {
        let category = category.into();
        if score > 100 {
            return Err(CoreError::ScoreOutOfRange { category, score });
        }
        Ok(Self {
            category,
            score,
            details: details.into(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Score in 0..=100, usable directly as a bar width percentage.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

/// The full match rationale: reasons in caller order, plus an optional
/// scored breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRationale {
    pub reasons: Vec<String>,
    pub breakdown: Vec<CompatibilityScore>,
}

/// Icon glyph for a breakdown category key.
///
/// Unrecognized keys fall back to the default glyph rather than erroring;
/// new categories may appear upstream before this table learns them.
pub fn category_icon(key: &str) -> &'static str {
    match key.to_ascii_lowercase().as_str() {
        "values" => "◈",
        "lifestyle" => "☀",
        "goals" => "➤",
        "interests" => "♪",
        "personality" => "✧",
        "communication" => "❝",
        _ => "✳",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_accepts_bounds() {
        assert!(CompatibilityScore::new("values", 0, "").is_ok());
        assert!(CompatibilityScore::new("values", 100, "").is_ok());
    }

    #[test]
    fn test_score_rejects_out_of_range() {
        let err = CompatibilityScore::new("values", 101, "").unwrap_err();
        assert_eq!(
            err,
            CoreError::ScoreOutOfRange {
                category: "values".to_string(),
                score: 101,
            }
        );
    }

    #[test]
    fn test_unknown_icon_key_falls_back() {
        assert_eq!(category_icon("unknown-key-xyz"), "✳");
    }

    #[test]
    fn test_known_icon_keys() {
        assert_ne!(category_icon("values"), "✳");
        assert_ne!(category_icon("Lifestyle"), "✳");
    }

    proptest! {
        #[test]
        fn prop_validation_accepts_exactly_the_range(score in 0u8..=255u8) {
            let result = CompatibilityScore::new("values", score, "");
            prop_assert_eq!(result.is_ok(), score <= 100);
        }
    }
}
