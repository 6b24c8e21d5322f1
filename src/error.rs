//! Error types for meeting-roster
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Any failure of a single page fetch (transport, non-success status,
//! decode) aborts the whole traversal; partial results are never returned.

use thiserror::Error;

/// The main error type for meeting-roster
#[derive(Error, Debug)]
pub enum Error {
    /// Client misconfiguration (bad builder input, missing base URL, ...)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// The base URL or a continuation link could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code of the response
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// A response body could not be decoded
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for meeting-roster
pub type Result<T> = std::result::Result<T, Error>;
