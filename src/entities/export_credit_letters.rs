//! Client for the export credit letters endpoint family.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::query::{append_query, build_query_string, build_search_query, QueryOptions, SearchCriteria};
use crate::response::ListResponse;

const BASE_PATH: &str = "/exportCreditLetters";

/// An export letter of credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportCreditLetter {
    #[serde(rename = "INTERNAL_REFERENCE", skip_serializing_if = "Option::is_none")]
    pub internal_reference: Option<u64>,
    /// Letter number.
    #[serde(rename = "NUMBER")]
    pub number: String,
    /// Issuing bank code.
    #[serde(rename = "BANK_CODE", skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(rename = "AMOUNT", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "CURRENCY", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Opening date, `YYYY-MM-DD`.
    #[serde(rename = "OPENING_DATE", skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<String>,
    /// Expiry date, `YYYY-MM-DD`.
    #[serde(rename = "EXPIRY_DATE", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(rename = "RECORD_STATUS", skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Handle for the `/exportCreditLetters` endpoints.
pub struct ExportCreditLetters<'a> {
    client: &'a ApiClient,
}

impl<'a> ExportCreditLetters<'a> {
    /// Creates a handle over `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists export credit letters.
    pub async fn get_all(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<ExportCreditLetter>, ApiError> {
        let path = append_query(BASE_PATH, &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Fetches one letter by record id.
    pub async fn get_by_id(
        &self,
        id: u64,
        options: &QueryOptions,
    ) -> Result<ExportCreditLetter, ApiError> {
        let path = append_query(&format!("{BASE_PATH}/{id}"), &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Creates a letter; returns the stored record.
    pub async fn create(&self, body: &ExportCreditLetter) -> Result<ExportCreditLetter, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Post, BASE_PATH, Some(&body))
            .await
    }

    /// Replaces the letter with record id `id`.
    pub async fn update(
        &self,
        id: u64,
        body: &ExportCreditLetter,
    ) -> Result<ExportCreditLetter, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Put, &format!("{BASE_PATH}/{id}"), Some(&body))
            .await
    }

    /// Deletes the letter with record id `id`.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .request_empty(RestMethod::Delete, &format!("{BASE_PATH}/{id}"), None)
            .await
    }

    /// Lists letters matching `criteria`; a `q` already present in
    /// `options` wins over the criteria.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<ListResponse<ExportCreditLetter>, ApiError> {
        let mut options = options;
        if options.q.is_none() {
            options.q = build_search_query(criteria);
        }
        self.get_all(&options).await
    }

    /// Convenience: letters issued by the given bank.
    pub async fn search_by_bank(
        &self,
        bank_code: &str,
        options: QueryOptions,
    ) -> Result<ListResponse<ExportCreditLetter>, ApiError> {
        let criteria = SearchCriteria::new().field("bankCode", bank_code);
        self.search(&criteria, options).await
    }

    /// Closes the letter with record id `id`; returns the updated record.
    pub async fn close(&self, id: u64) -> Result<ExportCreditLetter, ApiError> {
        self.client
            .request(RestMethod::Post, &format!("{BASE_PATH}/{id}/close"), None)
            .await
    }
}
