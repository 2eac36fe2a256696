use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server rejected the credentials (HTTP 401).
    #[error("authentication failed: {message}")]
    AuthenticationFailed {
        /// The server's error message.
        message: String,
    },

    /// The credentials are valid but lack permission for the operation
    /// (HTTP 403).
    #[error("insufficient permissions for {operation}")]
    InsufficientPermissions {
        /// The request path that was refused.
        operation: String,
    },

    /// The configured API key cannot be used as an HTTP header value.
    #[error("API key is not a valid header value")]
    InvalidKeyFormat,
}
