//! Errors raised by the remote query functions.
//!
//! There is no recovery path: callers log these and leave the
//! pending flag untouched, so the UI stays in its loading state until reset.

use thiserror::Error;

/// Failure of a call to the autocomplete or resolve endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL could not be used to build a request.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The configured base URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
