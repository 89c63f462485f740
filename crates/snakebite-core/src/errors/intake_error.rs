//! Intake form shaping errors.

use super::error_code::SnakebiteErrorCode;
use super::ScoringError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("phone must be 10 digits, got {length} characters")]
    InvalidPhone { length: usize },

    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("unknown meridian: {0} (expected AM or PM)")]
    UnknownMeridian(String),

    #[error("invalid clock hour: {0} (expected 1..=12)")]
    InvalidClockHour(u32),

    #[error("invalid minute: {0} (expected 0..=59)")]
    InvalidMinute(u32),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

impl SnakebiteErrorCode for IntakeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "INTAKE_MISSING_FIELD",
            Self::InvalidPhone { .. } => "INTAKE_INVALID_PHONE",
            Self::UnknownMonth(_) => "INTAKE_UNKNOWN_MONTH",
            Self::UnknownMeridian(_) => "INTAKE_UNKNOWN_MERIDIAN",
            Self::InvalidClockHour(_) => "INTAKE_INVALID_CLOCK_HOUR",
            Self::InvalidMinute(_) => "INTAKE_INVALID_MINUTE",
            Self::Scoring(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type IntakeResult<T> = Result<T, IntakeError>;
