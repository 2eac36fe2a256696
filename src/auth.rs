//! Authentication methods for the ERP API.

/// How the API key is attached to outgoing requests.
///
/// ## Examples
///
/// ```rust
/// use erp_api::ApiAuthMethod;
///
/// // Authorization: Bearer {key}
/// let bearer = ApiAuthMethod::Bearer;
///
/// // Custom header: X-Api-Key: {key}
/// let header = ApiAuthMethod::ApiKey("X-Api-Key".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiAuthMethod {
    /// `Authorization: Bearer {key}`.
    Bearer,
    /// The key is sent in a custom header with the given name.
    ApiKey(String),
    /// No authentication (e.g. a local test instance).
    #[default]
    None,
}
