//! Error taxonomy for requests against the monitored backend.
//!
//! Every variant renders as the message shown inline in the viewer, so the
//! `Display` output is user facing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Configuration required. Please set your base URL and API path.")]
    ConfigurationMissing,

    #[error("Request timeout - The server took too long to respond")]
    Timeout,

    #[error(
        "Server error ({status}): {status_text}{}",
        .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default()
    )]
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("Network error - Unable to connect to {url}. Please check if the service is running.")]
    Connectivity { url: String },

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Wraps an arbitrary failure, falling back to a generic text when empty.
    pub fn other(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            FetchError::Other("Unknown error occurred".to_string())
        } else {
            FetchError::Other(text)
        }
    }

    /// Maps a transport error from reqwest onto the taxonomy.
    pub fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() || err.is_request() {
            FetchError::Connectivity { url: url.to_string() }
        } else {
            FetchError::other(err.to_string())
        }
    }
}
