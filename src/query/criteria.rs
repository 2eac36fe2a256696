//! Criteria-to-filter-expression construction.
//!
//! [`build_search_query`] translates a [`SearchCriteria`] into a single
//! boolean filter expression in the API's dialect: `FIELD op value` clauses
//! composed with `and`/`or`, string operands single-quoted, numeric and
//! boolean operands raw.

use serde::Deserialize;
use strum::Display;

use super::field::to_remote_field;

/// A single filter operand.
///
/// Strings render single-quoted (`'ABC'`); integers, floats, and booleans
/// render raw (`1`, `2.5`, `true`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean operand, rendered raw.
    Bool(bool),
    /// Integer operand, rendered raw.
    Int(i64),
    /// Floating-point operand, rendered raw.
    Float(f64),
    /// String operand, rendered single-quoted.
    Str(String),
}

impl Scalar {
    fn render(&self) -> String {
        match self {
            Self::Str(s) => format!("'{s}'"),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The comparison operators the filter dialect recognizes.
///
/// [`EMISSION_ORDER`](Self::EMISSION_ORDER) fixes the order in which an
/// [`OperatorSet`]'s clauses are written out, so output is deterministic and
/// byte-for-byte testable regardless of how the set was populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FilterOperator {
    /// Equality.
    Eq,
    /// Wildcard match; the operand carries its own trailing `*`.
    Like,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Set membership, expanded to a parenthesized OR of equality tests.
    In,
    /// Inequality.
    Ne,
}

impl FilterOperator {
    /// The fixed order operator clauses are emitted in.
    pub const EMISSION_ORDER: [FilterOperator; 8] = [
        Self::Eq,
        Self::Like,
        Self::Gte,
        Self::Lte,
        Self::Gt,
        Self::Lt,
        Self::In,
        Self::Ne,
    ];
}

/// One or more comparison operators applied to a single field.
///
/// Populated operators combine with ` and ` in
/// [`FilterOperator::EMISSION_ORDER`]. The struct also deserializes from a
/// JSON operator object (`{ "gte": 10, "lte": 20 }`); unknown keys in such
/// an object are silently ignored per key, preserving the permissiveness
/// the API's callers rely on rather than treating it as an error.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::{build_search_query, OperatorSet, SearchCriteria};
///
/// let criteria = SearchCriteria::new()
///     .field("total", OperatorSet::new().gte(100).lt(500));
/// assert_eq!(
///     build_search_query(&criteria).unwrap(),
///     "TOTAL gte 100 and TOTAL lt 500",
/// );
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperatorSet {
    /// Equality operand.
    pub eq: Option<Scalar>,
    /// Wildcard pattern, including its trailing `*`.
    pub like: Option<String>,
    /// Greater-than-or-equal operand.
    pub gte: Option<Scalar>,
    /// Less-than-or-equal operand.
    pub lte: Option<Scalar>,
    /// Greater-than operand.
    pub gt: Option<Scalar>,
    /// Less-than operand.
    pub lt: Option<Scalar>,
    /// Set-membership operands.
    pub r#in: Option<Vec<Scalar>>,
    /// Inequality operand.
    pub ne: Option<Scalar>,
}

// Builder names mirror the wire operator vocabulary (`eq`, `ne`, `gt`,
// `lt`), which collides with the PartialEq/PartialOrd method names.
#[allow(clippy::should_implement_trait)]
impl OperatorSet {
    /// Creates an empty operator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `eq` operand.
    pub fn eq(mut self, value: impl Into<Scalar>) -> Self {
        self.eq = Some(value.into());
        self
    }

    /// Sets the `like` pattern. The pattern carries its own wildcard
    /// marker, e.g. `"AB*"`.
    pub fn like(mut self, pattern: impl Into<String>) -> Self {
        self.like = Some(pattern.into());
        self
    }

    /// Sets the `gte` operand.
    pub fn gte(mut self, value: impl Into<Scalar>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Sets the `lte` operand.
    pub fn lte(mut self, value: impl Into<Scalar>) -> Self {
        self.lte = Some(value.into());
        self
    }

    /// Sets the `gt` operand.
    pub fn gt(mut self, value: impl Into<Scalar>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Sets the `lt` operand.
    pub fn lt(mut self, value: impl Into<Scalar>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// Sets the `in` operands.
    pub fn is_in<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.r#in = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the `ne` operand.
    pub fn ne(mut self, value: impl Into<Scalar>) -> Self {
        self.ne = Some(value.into());
        self
    }

    /// The clause for one operator, or `None` when that operator is not set.
    fn clause_for(&self, op: FilterOperator, field: &str) -> Option<String> {
        match op {
            FilterOperator::Eq => self.eq.as_ref().map(|v| comparison(field, op, v)),
            FilterOperator::Like => self.like.as_ref().map(|p| format!("{field} like '{p}'")),
            FilterOperator::Gte => self.gte.as_ref().map(|v| comparison(field, op, v)),
            FilterOperator::Lte => self.lte.as_ref().map(|v| comparison(field, op, v)),
            FilterOperator::Gt => self.gt.as_ref().map(|v| comparison(field, op, v)),
            FilterOperator::Lt => self.lt.as_ref().map(|v| comparison(field, op, v)),
            FilterOperator::In => self.r#in.as_deref().and_then(|vs| or_of_eq(field, vs)),
            FilterOperator::Ne => self.ne.as_ref().map(|v| comparison(field, op, v)),
        }
    }

    fn clauses(&self, field: &str) -> Vec<String> {
        FilterOperator::EMISSION_ORDER
            .iter()
            .filter_map(|op| self.clause_for(*op, field))
            .collect()
    }
}

/// A field's filter expression: a scalar (equality), an ordered list
/// (OR of equality tests), or an operator set.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Equality against a single value.
    Scalar(Scalar),
    /// OR of equality tests against each value, in order, parenthesized.
    List(Vec<Scalar>),
    /// One or more operator clauses, ANDed together.
    Ops(OperatorSet),
}

impl FieldValue {
    /// The sub-expression this value contributes for `field`, or `None`
    /// when it contributes nothing (empty list, empty operator set).
    fn clause(&self, field: &str) -> Option<String> {
        match self {
            Self::Scalar(v) => Some(comparison(field, FilterOperator::Eq, v)),
            Self::List(values) => or_of_eq(field, values),
            Self::Ops(set) => {
                let clauses = set.clauses(field);
                if clauses.is_empty() {
                    None
                } else {
                    Some(clauses.join(" and "))
                }
            }
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<OperatorSet> for FieldValue {
    fn from(set: OperatorSet) -> Self {
        Self::Ops(set)
    }
}

fn comparison(field: &str, op: FilterOperator, value: &Scalar) -> String {
    format!("{field} {op} {}", value.render())
}

fn or_of_eq(field: &str, values: &[Scalar]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let parts: Vec<String> = values
        .iter()
        .map(|v| comparison(field, FilterOperator::Eq, v))
        .collect();
    Some(format!("({})", parts.join(" or ")))
}

/// An ordered set of per-field filter expressions.
///
/// Entries are kept in insertion order; that order is preserved in the
/// built expression. A `None` value means the field was supplied but has
/// nothing to filter on, and the entry is skipped entirely — no
/// "field is null" clause is emitted.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::{build_search_query, SearchCriteria};
///
/// let criteria = SearchCriteria::new()
///     .field("code", "ABC")
///     .field("status", 1)
///     .field_opt("auxilCode", None::<&str>);
/// assert_eq!(
///     build_search_query(&criteria).unwrap(),
///     "CODE eq 'ABC' and STATUS eq 1",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    entries: Vec<(String, Option<FieldValue>)>,
}

impl SearchCriteria {
    /// Creates an empty criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter on `name` (camelCase; translated to the remote
    /// convention when the expression is built).
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    /// Adds a filter on `name` only when `value` is `Some`; `None` entries
    /// are recorded but contribute no clause.
    pub fn field_opt<V: Into<FieldValue>>(
        mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Returns `true` when no field has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the filter expression for `criteria`.
///
/// Returns `None` when no entry produced a clause (empty criteria, or every
/// value absent/empty); callers treat that as "no filter", not as an error.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::{build_search_query, SearchCriteria};
///
/// let q = build_search_query(&SearchCriteria::new().field("code", "test"));
/// assert_eq!(q.as_deref(), Some("CODE eq 'test'"));
///
/// assert_eq!(build_search_query(&SearchCriteria::new()), None);
/// ```
pub fn build_search_query(criteria: &SearchCriteria) -> Option<String> {
    let mut clauses = Vec::with_capacity(criteria.entries.len());
    for (name, value) in &criteria.entries {
        let Some(value) = value else {
            continue;
        };
        let field = to_remote_field(name);
        if let Some(clause) = value.clause(&field) {
            clauses.push(clause);
        }
    }
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}
