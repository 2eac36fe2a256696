//! Field-name translation between the crate's camelCase names and the
//! remote schema's SCREAMING_SNAKE_CASE names.

/// Translates a camelCase field name to the remote schema's convention:
/// every uppercase letter gains a preceding underscore, then the whole
/// identifier is upper-cased.
///
/// This is the single translation rule shared by every criteria clause;
/// names already free of uppercase letters pass through upper-cased and
/// unchanged otherwise, so unknown fields still translate predictably.
///
/// ## Examples
///
/// ```rust
/// use erp_api::query::to_remote_field;
///
/// assert_eq!(to_remote_field("auxilCode"), "AUXIL_CODE");
/// assert_eq!(to_remote_field("code"), "CODE");
/// ```
pub fn to_remote_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c);
        } else {
            out.push(c.to_ascii_uppercase());
        }
    }
    out
}
