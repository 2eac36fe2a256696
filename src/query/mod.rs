//! Query construction for the ERP API.
//!
//! Two pure, stateless builders translate typed inputs into the API's
//! OData-like query dialect:
//!
//! - [`build_search_query`] turns a [`SearchCriteria`] into a boolean filter
//!   expression (`CODE eq 'ABC' and STATUS eq 1`), or `None` when the
//!   criteria contribute nothing.
//! - [`build_query_string`] turns a [`QueryOptions`] into a URL query string
//!   (`limit=10&sort=CODE`), or the empty string when no option is set.
//!
//! Neither builder has state or a failure path; any number of callers may
//! invoke them concurrently.

mod criteria;
mod field;
mod options;

pub use criteria::{build_search_query, FieldValue, FilterOperator, OperatorSet, Scalar, SearchCriteria};
pub use field::to_remote_field;
pub use options::{build_query_string, QueryOptions, SortDirection, SortSpec};

/// Appends a query string to a path, inserting the `?` separator only when
/// there is something to append.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::append_query;
///
/// assert_eq!(append_query("/items", "limit=10"), "/items?limit=10");
/// assert_eq!(append_query("/items", ""), "/items");
/// ```
pub fn append_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_query_empty_options_adds_no_question_mark() {
        let qs = build_query_string(&QueryOptions::default());
        assert_eq!(append_query("/entity", &qs), "/entity");
    }

    #[test]
    fn test_append_query_round_trip_is_well_formed() {
        let options = QueryOptions::default().limit(10).fields(["CODE", "NAME"]);
        let qs = build_query_string(&options);
        let path = append_query("/entity", &qs);
        assert_eq!(path, "/entity?limit=10&fields=CODE,NAME");
        assert!(!path.contains("?&"));
        assert!(!path.ends_with('?'));
    }

    #[test]
    fn test_criteria_feeds_query_string() {
        let q = build_search_query(&SearchCriteria::new().field("code", "test")).unwrap();
        let qs = build_query_string(&QueryOptions::default().q(q));
        assert_eq!(append_query("/entity", &qs), "/entity?q=CODE eq 'test'");
    }
}
