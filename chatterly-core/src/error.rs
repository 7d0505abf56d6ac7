use thiserror::Error;

/// Router error taxonomy.
///
/// `Configuration` is a programming-invariant violation (a classified handler
/// kind with no registered descriptor) and maps to a 5xx at the edge.
/// `Timeout` and `Backend` are recoverable at the caller's discretion.
/// `Validation` rejects a malformed inbound request before classification.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, RouterError>;
