//! HTTP client error types.

use thiserror::Error;

/// Fallback message when the backend gives nothing usable.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors that can occur when talking to the backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response. `message` is the backend-provided message where
    /// one was available, otherwise a generic fallback.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// The message to surface to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            FetchError::HttpError { message, .. } => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}
