/*!
 * Error types for the tonewell pipeline.
 *
 * This module contains custom error types for the translation backend layer,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The pipeline itself is fail-open: backend errors are recovered locally
 * inside `TranslationService::translate_text` and are never surfaced to
 * presentation callers. These types exist for the backend boundary and for
 * logging.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Error when making a request to the backend fails
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a backend response fails
    #[error("Failed to parse backend response: {0}")]
    ParseError(String),

    /// Error returned by the backend itself
    #[error("Backend responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the backend
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend did not respond before the client deadline
    #[error("Backend request timed out")]
    Timeout,
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}
