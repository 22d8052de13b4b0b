//! Error types for the stops API client.

use thiserror::Error;

/// Errors that can occur while fetching stops for a route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Upstream answered 200 but flagged an error in the envelope
    #[error("API error {code}: {message}")]
    Service { code: String, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The client could not be used at all
    #[error("API unavailable: {0}")]
    Unavailable(String),
}
