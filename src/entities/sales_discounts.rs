//! Client for the sales discounts endpoint family.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::query::{append_query, build_query_string, build_search_query, QueryOptions, SearchCriteria};
use crate::response::ListResponse;

const BASE_PATH: &str = "/salesDiscounts";

/// A sales discount definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDiscount {
    #[serde(rename = "INTERNAL_REFERENCE", skip_serializing_if = "Option::is_none")]
    pub internal_reference: Option<u64>,
    #[serde(rename = "CODE")]
    pub code: String,
    #[serde(rename = "DESCRIPTION", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount percentage, 0-100.
    #[serde(rename = "PERCENTAGE", skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Validity start, `YYYY-MM-DD`.
    #[serde(rename = "BEGIN_DATE", skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,
    /// Validity end, `YYYY-MM-DD`.
    #[serde(rename = "END_DATE", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "RECORD_STATUS", skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Handle for the `/salesDiscounts` endpoints.
pub struct SalesDiscounts<'a> {
    client: &'a ApiClient,
}

impl<'a> SalesDiscounts<'a> {
    /// Creates a handle over `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists sales discounts.
    pub async fn get_all(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<SalesDiscount>, ApiError> {
        let path = append_query(BASE_PATH, &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Fetches one discount by record id.
    pub async fn get_by_id(
        &self,
        id: u64,
        options: &QueryOptions,
    ) -> Result<SalesDiscount, ApiError> {
        let path = append_query(&format!("{BASE_PATH}/{id}"), &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Creates a discount; returns the stored record.
    pub async fn create(&self, body: &SalesDiscount) -> Result<SalesDiscount, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Post, BASE_PATH, Some(&body))
            .await
    }

    /// Replaces the discount with record id `id`.
    pub async fn update(&self, id: u64, body: &SalesDiscount) -> Result<SalesDiscount, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Put, &format!("{BASE_PATH}/{id}"), Some(&body))
            .await
    }

    /// Deletes the discount with record id `id`.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .request_empty(RestMethod::Delete, &format!("{BASE_PATH}/{id}"), None)
            .await
    }

    /// Lists discounts matching `criteria`; a `q` already present in
    /// `options` wins over the criteria.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<ListResponse<SalesDiscount>, ApiError> {
        let mut options = options;
        if options.q.is_none() {
            options.q = build_search_query(criteria);
        }
        self.get_all(&options).await
    }

    /// Convenience: discounts whose code starts with `prefix`.
    pub async fn search_by_code_prefix(
        &self,
        prefix: &str,
        options: QueryOptions,
    ) -> Result<ListResponse<SalesDiscount>, ApiError> {
        use crate::query::OperatorSet;

        let criteria =
            SearchCriteria::new().field("code", OperatorSet::new().like(format!("{prefix}*")));
        self.search(&criteria, options).await
    }

    /// Fetches the discount with the given code via its dedicated endpoint.
    pub async fn get_by_code(
        &self,
        code: &str,
        options: &QueryOptions,
    ) -> Result<SalesDiscount, ApiError> {
        let path = append_query(
            &format!("{BASE_PATH}/code/{code}"),
            &build_query_string(options),
        );
        self.client.request(RestMethod::Get, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample(code: &str) -> SalesDiscount {
        SalesDiscount {
            internal_reference: Some(5),
            code: code.to_string(),
            description: Some("Seasonal".to_string()),
            percentage: Some(10.0),
            begin_date: None,
            end_date: None,
            record_status: Some(0),
        }
    }

    #[tokio::test]
    async fn test_search_by_code_prefix_uses_like() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/salesDiscounts"))
            .and(query_param("q", "CODE like 'DSC*'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ListResponse {
                items: vec![sample("DSC-10")],
                count: None,
            }))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let discounts = SalesDiscounts::new(&client);
        let result = discounts
            .search_by_code_prefix("DSC", QueryOptions::default())
            .await
            .unwrap();
        assert_eq!(result.items[0].code, "DSC-10");
    }

    #[tokio::test]
    async fn test_get_by_code_path_and_projection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/salesDiscounts/code/DSC-10"))
            .and(query_param("fields", "CODE,PERCENTAGE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample("DSC-10")))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let discounts = SalesDiscounts::new(&client);
        let result = discounts
            .get_by_code(
                "DSC-10",
                &QueryOptions::default().fields(["CODE", "PERCENTAGE"]),
            )
            .await
            .unwrap();
        assert_eq!(result.code, "DSC-10");
    }

    #[tokio::test]
    async fn test_get_all_with_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/salesDiscounts"))
            .and(query_param("count", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ListResponse {
                items: vec![sample("DSC-10")],
                count: Some(12),
            }))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let discounts = SalesDiscounts::new(&client);
        let result = discounts
            .get_all(&QueryOptions::default().count(true))
            .await
            .unwrap();
        assert_eq!(result.count, Some(12));
    }
}
