//! List-request options and query-string construction.

use strum::Display;

/// Sort direction. Ascending is the API's implicit default and is never
/// written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// An ordering specification: one or more field names sharing a single
/// direction. The API does not support per-field direction mixing, so the
/// direction applies to the whole list and is appended at most once.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::{build_query_string, QueryOptions, SortSpec};
///
/// let options = QueryOptions::default().sort(SortSpec::by("CODE").descending());
/// assert_eq!(build_query_string(&options), "sort=CODE,desc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    fields: Vec<String>,
    direction: Option<SortDirection>,
}

impl SortSpec {
    /// Sorts by a single field, ascending.
    ///
    /// Like projection fields, sort fields carry the remote casing already
    /// (`"CODE"`, `"AUXIL_CODE"`); they are emitted verbatim.
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
            direction: None,
        }
    }

    /// Sorts by several fields, ascending, in the given order.
    pub fn by_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            direction: None,
        }
    }

    /// Applies a direction to the whole field list.
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Shorthand for [`direction(SortDirection::Desc)`](Self::direction).
    pub fn descending(self) -> Self {
        self.direction(SortDirection::Desc)
    }

    /// Renders `FIELD[,FIELD...][,desc]`, or `None` when no field is named.
    /// An explicit ascending direction renders identically to no direction.
    fn render(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let mut out = self.fields.join(",");
        if self.direction == Some(SortDirection::Desc) {
            out.push_str(",desc");
        }
        Some(out)
    }
}

impl From<&str> for SortSpec {
    fn from(field: &str) -> Self {
        Self::by(field)
    }
}

impl From<String> for SortSpec {
    fn from(field: String) -> Self {
        Self::by(field)
    }
}

impl From<Vec<&str>> for SortSpec {
    fn from(fields: Vec<&str>) -> Self {
        Self::by_fields(fields)
    }
}

impl From<Vec<String>> for SortSpec {
    fn from(fields: Vec<String>) -> Self {
        Self::by_fields(fields)
    }
}

/// Options for list and detail requests: pagination, field projection,
/// ordering, raw filter, total-count flag, and expansion depth.
///
/// Every option is independent and optional; the default value builds the
/// empty query string. `q` carries a complete filter expression (typically
/// from [`build_search_query`](super::build_search_query)) and is emitted
/// verbatim — the builder does not re-quote it.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::{build_query_string, QueryOptions};
///
/// let options = QueryOptions::default().limit(10).offset(0).sort("CODE");
/// assert_eq!(build_query_string(&options), "limit=10&offset=0&sort=CODE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Page size.
    pub limit: Option<u64>,
    /// Skip count. `Some(0)` is emitted; presence, not truthiness, decides.
    pub offset: Option<u64>,
    /// Projection: remote field names, caller order, no deduplication.
    pub fields: Option<Vec<String>>,
    /// Ordering.
    pub sort: Option<SortSpec>,
    /// Raw, pre-built filter expression; emitted verbatim.
    pub q: Option<String>,
    /// Request total-count metadata. `false` emits nothing.
    pub count: bool,
    /// Remote expansion depth, e.g. `"full"`.
    pub expand_level: Option<String>,
}

impl QueryOptions {
    /// Sets the page size.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the skip count.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the projected field names (remote casing, caller order).
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the ordering.
    pub fn sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the raw filter expression.
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Requests total-count metadata.
    pub fn count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Sets the expansion depth.
    pub fn expand_level(mut self, level: impl Into<String>) -> Self {
        self.expand_level = Some(level.into());
        self
    }
}

/// Builds the query string for `options`.
///
/// Keys are emitted in a fixed order — `limit`, `offset`, `fields`, `sort`,
/// `q`, `count`, `expandLevel` — joined with `&`. Absent options are
/// omitted entirely; there is no placeholder emission and the result never
/// begins with `?` (the caller prepends one only when the string is
/// non-empty, see [`append_query`](super::append_query)).
///
/// The output is the raw query component; percent-encoding is applied by
/// the URL layer that consumes it, not here.
pub fn build_query_string(options: &QueryOptions) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(limit) = options.limit {
        pairs.push(format!("limit={limit}"));
    }
    if let Some(offset) = options.offset {
        pairs.push(format!("offset={offset}"));
    }
    if let Some(fields) = &options.fields {
        if !fields.is_empty() {
            pairs.push(format!("fields={}", fields.join(",")));
        }
    }
    if let Some(rendered) = options.sort.as_ref().and_then(SortSpec::render) {
        pairs.push(format!("sort={rendered}"));
    }
    if let Some(q) = &options.q {
        pairs.push(format!("q={q}"));
    }
    if options.count {
        pairs.push("count=true".to_string());
    }
    if let Some(level) = &options.expand_level {
        pairs.push(format!("expandLevel={level}"));
    }
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_is_empty_string() {
        assert_eq!(build_query_string(&QueryOptions::default()), "");
    }

    #[test]
    fn test_limit_offset_sort() {
        let options = QueryOptions::default().limit(10).offset(0).sort("CODE");
        assert_eq!(build_query_string(&options), "limit=10&offset=0&sort=CODE");
    }

    #[test]
    fn test_offset_zero_is_emitted() {
        let options = QueryOptions::default().offset(0);
        assert_eq!(build_query_string(&options), "offset=0");
    }

    #[test]
    fn test_fields_preserve_order_without_dedup() {
        let options = QueryOptions::default().fields(["CODE", "NAME", "CODE"]);
        assert_eq!(build_query_string(&options), "fields=CODE,NAME,CODE");
    }

    #[test]
    fn test_limit_and_fields() {
        let options = QueryOptions::default().limit(10).fields(["CODE", "NAME"]);
        assert_eq!(build_query_string(&options), "limit=10&fields=CODE,NAME");
    }

    #[test]
    fn test_sort_single_field_descending() {
        let options = QueryOptions::default().sort(SortSpec::by("CODE").descending());
        assert_eq!(build_query_string(&options), "sort=CODE,desc");
    }

    #[test]
    fn test_sort_multiple_fields_share_one_direction() {
        let options = QueryOptions::default()
            .sort(SortSpec::by_fields(["CODE", "AUXIL_CODE"]).descending());
        assert_eq!(build_query_string(&options), "sort=CODE,AUXIL_CODE,desc");
    }

    #[test]
    fn test_sort_explicit_ascending_is_never_written() {
        let options =
            QueryOptions::default().sort(SortSpec::by("CODE").direction(SortDirection::Asc));
        assert_eq!(build_query_string(&options), "sort=CODE");
    }

    #[test]
    fn test_q_is_emitted_verbatim() {
        let options = QueryOptions::default().q("CODE eq 'test'");
        assert_eq!(build_query_string(&options), "q=CODE eq 'test'");
    }

    #[test]
    fn test_count_true_only() {
        assert_eq!(
            build_query_string(&QueryOptions::default().count(true)),
            "count=true",
        );
        assert_eq!(build_query_string(&QueryOptions::default().count(false)), "");
    }

    #[test]
    fn test_expand_level() {
        let options = QueryOptions::default().expand_level("full");
        assert_eq!(build_query_string(&options), "expandLevel=full");
    }

    #[test]
    fn test_fixed_key_order_with_all_options_set() {
        let options = QueryOptions::default()
            .expand_level("full")
            .count(true)
            .q("CODE eq 'X'")
            .sort("CODE")
            .fields(["CODE"])
            .offset(20)
            .limit(10);
        assert_eq!(
            build_query_string(&options),
            "limit=10&offset=20&fields=CODE&sort=CODE&q=CODE eq 'X'&count=true&expandLevel=full",
        );
    }

    #[test]
    fn test_no_empty_pairs() {
        let qs = build_query_string(&QueryOptions::default().limit(5).count(false));
        assert!(!qs.contains("&&"));
        assert!(!qs.split('&').any(|pair| pair.ends_with('=')));
    }

    #[test]
    fn test_idempotent() {
        let options = QueryOptions::default().limit(10).q("CODE eq 'X'");
        assert_eq!(build_query_string(&options), build_query_string(&options));
    }
}
