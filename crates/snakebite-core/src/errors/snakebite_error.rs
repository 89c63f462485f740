use super::error_code::SnakebiteErrorCode;
use super::{ConfigError, IntakeError, ScoringError};

/// Top-level error type for the workspace.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SnakebiteError {
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),
}

impl SnakebiteErrorCode for SnakebiteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Intake(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type SnakebiteResult<T> = Result<T, SnakebiteError>;
