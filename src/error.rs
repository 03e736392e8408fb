//! Error types for the support service.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors surfaced at the HTTP boundary of the chat endpoint.
///
/// The messages returned to callers are generic; the detail carried here is
/// for logs only.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Request body too large: {0}")]
    TooLarge(String),

    #[error("Internal fault: {0}")]
    Internal(String),
}

impl RequestError {
    /// Caller-facing message. Never includes request detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            RequestError::Malformed(_) => "Invalid request body",
            RequestError::TooLarge(_) => "Request body too large",
            RequestError::Internal(_) => "Internal server error",
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
