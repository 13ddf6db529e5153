//! Client Error Types

use thiserror::Error;

/// Errors surfaced by the API client and session manager.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, DNS, timeouts).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a failure envelope. The message is the
    /// server's, passed through unchanged for display.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No session is present; callers should route to the login surface.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Local session storage failed.
    #[error("Session storage error: {0}")]
    Storage(String),
}
