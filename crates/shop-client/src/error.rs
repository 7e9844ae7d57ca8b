//! Error types for storefront requests.

use thiserror::Error;

/// Errors that can occur while talking to the storefront server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the status reason.
        message: String,
    },

    /// Failed to parse a JSON body.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A configured URL or cookie header is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A mutating request was attempted without a CSRF token.
    #[error("no CSRF token available")]
    MissingCsrfToken,
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display on the page.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) | Self::Timeout => {
                "Could not reach the shop. Please check your connection and try again."
            }
            Self::Server { status, message } if *status < 500 && !message.is_empty() => {
                message.as_str()
            }
            Self::Server { .. } => "The shop could not process your request. Please try again.",
            Self::MissingCsrfToken => "Your session has expired. Please reload the page.",
            Self::JsonParse(_) | Self::InvalidConfig(_) => "An unexpected error occurred.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for storefront requests.
pub type Result<T> = std::result::Result<T, ClientError>;
