//! Client for the import credit letters endpoint family.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::query::{append_query, build_query_string, build_search_query, QueryOptions, SearchCriteria};
use crate::response::ListResponse;

const BASE_PATH: &str = "/importCreditLetters";

/// An import letter of credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportCreditLetter {
    #[serde(rename = "INTERNAL_REFERENCE", skip_serializing_if = "Option::is_none")]
    pub internal_reference: Option<u64>,
    #[serde(rename = "NUMBER")]
    pub number: String,
    #[serde(rename = "BANK_CODE", skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Supplier (vendor) code the letter was opened for.
    #[serde(rename = "SUPPLIER_CODE", skip_serializing_if = "Option::is_none")]
    pub supplier_code: Option<String>,
    #[serde(rename = "AMOUNT", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "CURRENCY", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Expiry date, `YYYY-MM-DD`.
    #[serde(rename = "EXPIRY_DATE", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(rename = "RECORD_STATUS", skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Handle for the `/importCreditLetters` endpoints.
pub struct ImportCreditLetters<'a> {
    client: &'a ApiClient,
}

impl<'a> ImportCreditLetters<'a> {
    /// Creates a handle over `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists import credit letters.
    pub async fn get_all(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<ImportCreditLetter>, ApiError> {
        let path = append_query(BASE_PATH, &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Fetches one letter by record id.
    pub async fn get_by_id(
        &self,
        id: u64,
        options: &QueryOptions,
    ) -> Result<ImportCreditLetter, ApiError> {
        let path = append_query(&format!("{BASE_PATH}/{id}"), &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Creates a letter; returns the stored record.
    pub async fn create(&self, body: &ImportCreditLetter) -> Result<ImportCreditLetter, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Post, BASE_PATH, Some(&body))
            .await
    }

    /// Replaces the letter with record id `id`.
    pub async fn update(
        &self,
        id: u64,
        body: &ImportCreditLetter,
    ) -> Result<ImportCreditLetter, ApiError> {
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
    ) -> Result<ListResponse<ImportCreditLetter>, ApiError> {
        let mut options = options;
        if options.q.is_none() {
            options.q = build_search_query(criteria);
        }
        self.get_all(&options).await
    }

    /// Convenience: letters opened for the given supplier.
    pub async fn search_by_supplier(
        &self,
        supplier_code: &str,
        options: QueryOptions,
    ) -> Result<ListResponse<ImportCreditLetter>, ApiError> {
        let criteria = SearchCriteria::new().field("supplierCode", supplier_code);
        self.search(&criteria, options).await
    }

    /// Closes the letter with record id `id`; returns the updated record.
    pub async fn close(&self, id: u64) -> Result<ImportCreditLetter, ApiError> {
        self.client
            .request(RestMethod::Post, &format!("{BASE_PATH}/{id}/close"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample(number: &str) -> ImportCreditLetter {
        ImportCreditLetter {
            internal_reference: Some(5),
            number: number.to_string(),
            bank_code: Some("BNK-2".to_string()),
            supplier_code: Some("SUP-9".to_string()),
            amount: Some(8200.0),
            currency: Some("EUR".to_string()),
            expiry_date: Some("2026-11-30".to_string()),
            record_status: Some(0),
        }
    }

    #[tokio::test]
    async fn test_search_by_supplier_builds_expected_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/importCreditLetters"))
            .and(query_param("q", "SUPPLIER_CODE eq 'SUP-9'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ListResponse {
                items: vec![sample("ICL-1")],
                count: None,
            }))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let letters = ImportCreditLetters::new(&client);
        let result = letters
            .search_by_supplier("SUP-9", QueryOptions::default())
            .await
            .unwrap();
        assert_eq!(result.items[0].number, "ICL-1");
    }

    #[tokio::test]
    async fn test_close_posts_to_action_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/importCreditLetters/5/close"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ImportCreditLetter {
                record_status: Some(1),
                ..sample("ICL-1")
            }))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let letters = ImportCreditLetters::new(&client);
        let closed = letters.close(5).await.unwrap();
        assert_eq!(closed.record_status, Some(1));
    }
}
