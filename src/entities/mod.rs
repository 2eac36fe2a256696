//! Per-entity API clients.
//!
//! Each module pairs a `serde` model of the remote record (fields renamed to
//! the schema's SCREAMING_SNAKE_CASE) with a thin client handle over
//! [`ApiClient`](crate::ApiClient). The handles all share the same method
//! shape: `get_all`, `get_by_id`, `create`, `update`, `delete`, `search`,
//! plus the entity's own one-off endpoints.

pub mod characteristic_sets;
pub mod export_credit_letters;
pub mod import_credit_letters;
pub mod payment_difference_invoices;
pub mod sales_discounts;
