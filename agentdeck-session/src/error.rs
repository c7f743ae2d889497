//! Session provider error types
//!
//! Error handling for session operations using thiserror for proper error
//! trait implementations.

use thiserror::Error;

/// Convenience result alias for provider operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures surfaced by the session provider client.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Network request failed before a response was produced
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Provider rejected the request ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Operation requires an active session and none exists
    #[error("No active session")]
    NotSignedIn,

    /// A provider URL could not be constructed
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The system browser could not be launched for an OAuth redirect
    #[error("Failed to open browser for '{provider}' sign-in: {source}")]
    BrowserLaunch {
        provider: String,
        #[source]
        source: std::io::Error,
    },

    /// The provider response did not match the expected shape
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}
