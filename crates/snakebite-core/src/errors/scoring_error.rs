//! Scoring engine errors.

use super::error_code::SnakebiteErrorCode;

/// Errors raised by a single scoring call.
///
/// Missing reference-table keys are not errors; they degrade to zero vectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid {argument}: {value} (expected {expected})")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ScoringError {
    pub fn invalid_hour(hour: u32) -> Self {
        Self::InvalidArgument {
            argument: "hour",
            value: hour.to_string(),
            expected: "an hour in 0..=23",
        }
    }

    pub fn invalid_month(month: u32) -> Self {
        Self::InvalidArgument {
            argument: "month",
            value: month.to_string(),
            expected: "a month in 1..=12",
        }
    }
}

impl SnakebiteErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "SCORING_INVALID_ARGUMENT",
        }
    }
}

/// Convenience type alias.
pub type ScoringResult<T> = Result<T, ScoringError>;
