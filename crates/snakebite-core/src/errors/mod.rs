mod config_error;
pub mod error_code;
mod intake_error;
mod scoring_error;
mod snakebite_error;

pub use config_error::ConfigError;
pub use error_code::SnakebiteErrorCode;
pub use intake_error::{IntakeError, IntakeResult};
pub use scoring_error::{ScoringError, ScoringResult};
pub use snakebite_error::{SnakebiteError, SnakebiteResult};
