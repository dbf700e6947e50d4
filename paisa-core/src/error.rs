use thiserror::Error;

/// Unified error type for the paisa workspace.
///
/// This wraps upstream fetch failures (status, transport, malformed
/// envelopes), the empty-dataset condition, and argument validation errors.
/// A failed fetch is terminal for that attempt: retry policy belongs to the
/// caller's data-fetching layer, never to this crate.
#[derive(Debug, Error)]
pub enum PaisaError {
    /// The upstream API answered with a non-success HTTP status.
    #[error("upstream request failed with status {status}")]
    Status {
        /// The HTTP status code the upstream returned.
        status: u16,
    },

    /// The request could not be executed at all (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected pagination envelope or
    /// record shape.
    #[error("malformed response envelope: {0}")]
    Envelope(String),

    /// No usable observations remained after filtering null values.
    #[error("no valid observations after filtering")]
    EmptyData,

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl PaisaError {
    /// Helper: build a `Status` error from an HTTP status code.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Helper: build a `Transport` error with a message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Helper: build an `Envelope` error with a message.
    pub fn envelope(msg: impl Into<String>) -> Self {
        Self::Envelope(msg.into())
    }

    /// Helper: build an `InvalidArg` error with a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Whether this error belongs to the fetch-failure class (status,
    /// transport, envelope) as opposed to data or argument problems.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Status { .. } | Self::Transport(_) | Self::Envelope(_)
        )
    }
}
