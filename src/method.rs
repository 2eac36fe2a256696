//! HTTP method types for the ERP REST API.

use strum::{Display, EnumString};

/// The HTTP verbs the ERP API accepts.
///
/// ## Examples
///
/// ```rust
/// use erp_api::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
///
/// // Parse from string
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a record or list.
    Get,
    /// HTTP POST - Create a record or trigger an endpoint action.
    Post,
    /// HTTP PUT - Replace a record entirely.
    Put,
    /// HTTP PATCH - Partially update a record.
    Patch,
    /// HTTP DELETE - Remove a record.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
        assert_eq!("PUT".parse::<RestMethod>().unwrap(), RestMethod::Put);
        assert!("CONNECT".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_has_body() {
        assert!(!RestMethod::Get.has_body());
        assert!(RestMethod::Post.has_body());
        assert!(RestMethod::Put.has_body());
        assert!(RestMethod::Patch.has_body());
        assert!(!RestMethod::Delete.has_body());
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Get.to_reqwest(), reqwest::Method::GET);
        assert_eq!(RestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
