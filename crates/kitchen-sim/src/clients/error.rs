//! Error types for the challenge client.

use thiserror::Error;

/// Errors that can occur while talking to the challenge server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The problem response did not carry a test id.
    #[error("Response from {url} is missing the {header} header")]
    MissingTestId { url: String, header: &'static str },

    /// The response body could not be decoded.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
