//! Error types for Kindred core operations

use thiserror::Error;

/// Main error type for Kindred core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Status string from an external record is not in the closed enumeration
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Compatibility score outside the 0-100 range
    #[error("Score {score} for category '{category}' is outside 0..=100")]
    ScoreOutOfRange { category: String, score: u8 },

    /// Attempted to send a message with no visible content
    #[error("Message content is empty")]
    EmptyMessage,
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownStatus("ghosted".to_string());
        assert_eq!(format!("{}", err), "Unknown status: ghosted");
    }

    #[test]
    fn test_score_error_display() {
        let err = CoreError::ScoreOutOfRange {
            category: "values".to_string(),
            score: 140,
        };
        assert_eq!(
            format!("{}", err),
            "Score 140 for category 'values' is outside 0..=100"
        );
    }
}
