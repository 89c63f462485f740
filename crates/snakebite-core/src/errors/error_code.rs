//! Stable machine-readable error codes.

/// Every error type in the workspace maps each variant to a fixed code that
/// callers can match on without parsing messages.
pub trait SnakebiteErrorCode {
    fn error_code(&self) -> &'static str;
}
