//! Error types shared by the rewrite client, CLI, and TUI.

use thiserror::Error;

/// Errors surfaced while configuring Reframe or talking to the rewrite
/// service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The health probe failed or the service could not be reached.
    #[error("API health check failed{detail}")]
    ServiceUnavailable {
        /// Either `. Status: <code>` or `: <transport error>`.
        detail: String,
    },

    /// The rewrite endpoint returned 404.
    #[error(
        "The /rewrite endpoint was not found at {url}. Ensure the rewrite service is running \
         and exposes the endpoint."
    )]
    EndpointNotFound {
        /// Fully-qualified endpoint URL that was called.
        url: String,
    },

    /// The rewrite endpoint returned a non-success status.
    #[error("HTTP error! Status: {status}, Detail: {detail}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Detail returned by the service, rendered as JSON text.
        detail: String,
    },

    /// A success response could not be decoded.
    #[error("rewrite response could not be decoded: {message}")]
    MalformedResponse {
        /// Decoder error detail.
        message: String,
    },

    /// Networking failed after the health probe succeeded.
    #[error("network error talking to the rewrite service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl RewriteError {
    /// Builds a [`Self::ServiceUnavailable`] for a non-success probe status.
    #[must_use]
    pub fn health_status(status: u16) -> Self {
        Self::ServiceUnavailable {
            detail: format!(". Status: {status}"),
        }
    }

    /// Builds a [`Self::ServiceUnavailable`] for a probe that never got a
    /// response.
    #[must_use]
    pub fn health_unreachable(message: impl std::fmt::Display) -> Self {
        Self::ServiceUnavailable {
            detail: format!(": {message}"),
        }
    }

    /// Builds a [`Self::Io`] from a standard I/O error.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
