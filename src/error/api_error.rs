use thiserror::Error;

use super::{AuthError, ClientError};

/// Top-level error type for all API operations.
///
/// Entity client methods return this type; it wraps the more specific
/// transport and auth errors and the JSON decode failure case.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client or network error.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Authentication or authorization error.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
