//! Error types for the back-office client

use thiserror::Error;

/// Result type alias for back-office client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the back-office client
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication failed (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization failed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// Application-level failure: a 200 response whose envelope says
    /// `isSuccess: false`, carrying the server-provided message
    #[error("{0}")]
    Api(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from an HTTP status code and message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Error::Authentication(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            422 => Error::Validation(message),
            500..=599 => Error::Server(message),
            _ => Error::Other(format!("HTTP {}: {}", status, message)),
        }
    }

    /// Message fit to show the operator verbatim.
    ///
    /// Only application-level failures carry one; transport and status
    /// errors surface as the caller's generic message instead.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Error::Api(message) => Some(message),
            _ => None,
        }
    }
}
