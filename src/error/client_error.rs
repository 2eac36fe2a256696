use thiserror::Error;

/// HTTP client and network errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed before a response was received (network error,
    /// timeout, TLS failure).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body, or the status line when the body is unreadable.
        message: String,
    },

    /// The request could not be constructed (bad URL join, invalid header).
    #[error("{0}")]
    Connection(String),
}
