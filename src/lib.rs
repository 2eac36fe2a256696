//! Typed async client for the ERP REST API.
//!
//! The crate is organized around two layers:
//!
//! - The **query layer** ([`query`]) — pure functions that translate
//!   structured search criteria and list options into the API's OData-like
//!   filter dialect and URL query strings. This is where all the real logic
//!   lives; everything else is plumbing around it.
//! - The **transport layer** ([`client`]) — an [`ApiClient`] wrapping
//!   `reqwest` with base-URL, auth, and timeout configuration, consumed by
//!   the per-entity handles in [`entities`].
//!
//! ## Examples
//!
//! ```rust,no_run
//! use erp_api::{ApiClient, ApiAuthMethod};
//! use erp_api::entities::sales_discounts::SalesDiscounts;
//! use erp_api::query::{QueryOptions, SearchCriteria};
//! use url::Url;
//!
//! # async fn example() -> Result<(), erp_api::ApiError> {
//! let base_url = Url::parse("https://erp.example.com/api/v2/").unwrap();
//! let client = ApiClient::builder(base_url)
//!     .auth(ApiAuthMethod::ApiKey("X-Api-Key".to_string()), "secret")
//!     .build()?;
//!
//! let discounts = SalesDiscounts::new(&client);
//! let criteria = SearchCriteria::new().field("code", "DSC-10");
//! let page = discounts.search(&criteria, QueryOptions::default().limit(20)).await?;
//! println!("{} discounts", page.items.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod entities;
pub mod error;
pub mod method;
pub mod query;
pub mod response;

pub use auth::ApiAuthMethod;
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ApiError, AuthError, ClientError};
pub use method::RestMethod;
pub use query::{
    build_query_string, build_search_query, FieldValue, FilterOperator, OperatorSet, QueryOptions,
    Scalar, SearchCriteria, SortDirection, SortSpec,
};
pub use response::ListResponse;
