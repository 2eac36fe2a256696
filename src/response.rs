//! Response envelope types.

use serde::{Deserialize, Serialize};

/// The envelope the API wraps list results in.
///
/// `count` is the total number of matching records on the server, populated
/// only when the request asked for it via the `count` flag on
/// [`QueryOptions`](crate::query::QueryOptions); it is unrelated to
/// `items.len()`, which reflects the requested page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Total matching record count, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> ListResponse<T> {
    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_count() {
        let page: ListResponse<String> =
            serde_json::from_str(r#"{"items": ["a", "b"], "count": 41}"#).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.count, Some(41));
    }

    #[test]
    fn test_deserialize_without_count() {
        let page: ListResponse<String> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.count, None);
    }
}
