//! Layered error types for the ERP API client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`ClientError`] - HTTP client and network errors
//! - [`AuthError`] - Authentication and authorization errors
//!
//! The query builders in [`crate::query`] never produce errors: empty
//! criteria are a valid "no filter" outcome, not a failure.

mod api_error;
mod auth_error;
mod client_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
