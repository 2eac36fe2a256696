//! Client for the characteristic sets endpoint family.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::query::{append_query, build_query_string, build_search_query, QueryOptions, SearchCriteria};
use crate::response::ListResponse;

const BASE_PATH: &str = "/characteristicSets";

/// A characteristic set: a named group of item characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicSet {
    /// Server-assigned record id; absent on records not yet created.
    #[serde(rename = "INTERNAL_REFERENCE", skip_serializing_if = "Option::is_none")]
    pub internal_reference: Option<u64>,
    /// Unique set code.
    #[serde(rename = "CODE")]
    pub code: String,
    /// Human-readable description.
    #[serde(rename = "DESCRIPTION", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Secondary grouping code.
    #[serde(rename = "AUXIL_CODE", skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    /// Record status flag (0 = active, 1 = passive).
    #[serde(rename = "RECORD_STATUS", skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Handle for the `/characteristicSets` endpoints.
///
/// ## Examples
///
/// ```rust,no_run
/// use erp_api::ApiClient;
/// use erp_api::entities::characteristic_sets::CharacteristicSets;
/// use erp_api::query::{QueryOptions, SearchCriteria};
/// use url::Url;
///
/// # async fn example() -> Result<(), erp_api::ApiError> {
/// let client = ApiClient::new(Url::parse("https://erp.example.com/api/v2/").unwrap())?;
/// let sets = CharacteristicSets::new(&client);
///
/// let criteria = SearchCriteria::new().field("auxilCode", "COLORS");
/// let page = sets.search(&criteria, QueryOptions::default().limit(50)).await?;
/// # Ok(())
/// # }
/// ```
pub struct CharacteristicSets<'a> {
    client: &'a ApiClient,
}

impl<'a> CharacteristicSets<'a> {
    /// Creates a handle over `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists characteristic sets.
    pub async fn get_all(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<CharacteristicSet>, ApiError> {
        let path = append_query(BASE_PATH, &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Fetches one characteristic set by record id.
    pub async fn get_by_id(
        &self,
        id: u64,
        options: &QueryOptions,
    ) -> Result<CharacteristicSet, ApiError> {
        let path = append_query(&format!("{BASE_PATH}/{id}"), &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Creates a characteristic set; returns the stored record.
    pub async fn create(&self, body: &CharacteristicSet) -> Result<CharacteristicSet, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Post, BASE_PATH, Some(&body))
            .await
    }

    /// Replaces the characteristic set with record id `id`.
    pub async fn update(
        &self,
        id: u64,
        body: &CharacteristicSet,
    ) -> Result<CharacteristicSet, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Put, &format!("{BASE_PATH}/{id}"), Some(&body))
            .await
    }

    /// Deletes the characteristic set with record id `id`.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .request_empty(RestMethod::Delete, &format!("{BASE_PATH}/{id}"), None)
            .await
    }

    /// Lists characteristic sets matching `criteria`.
    ///
    /// The criteria are translated into a filter expression and installed as
    /// the options' `q`; an explicit `q` already present in `options` wins
    /// and the criteria are not consulted.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<ListResponse<CharacteristicSet>, ApiError> {
        let mut options = options;
        if options.q.is_none() {
            options.q = build_search_query(criteria);
        }
        self.get_all(&options).await
    }

    /// Convenience: the single set with the given code, if present.
    pub async fn search_by_code(
        &self,
        code: &str,
        options: QueryOptions,
    ) -> Result<ListResponse<CharacteristicSet>, ApiError> {
        let criteria = SearchCriteria::new().field("code", code);
        self.search(&criteria, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample(code: &str) -> CharacteristicSet {
        CharacteristicSet {
            internal_reference: Some(1),
            code: code.to_string(),
            description: None,
            auxil_code: None,
            record_status: Some(0),
        }
    }

    fn page(items: Vec<CharacteristicSet>) -> ListResponse<CharacteristicSet> {
        ListResponse { items, count: None }
    }

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_get_all_with_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/characteristicSets"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![sample("CS-1")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);
        let result = sets
            .get_all(&QueryOptions::default().limit(10).offset(0))
            .await
            .unwrap();
        assert_eq!(result.items[0].code, "CS-1");
    }

    #[tokio::test]
    async fn test_get_all_empty_options_sends_no_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/characteristicSets"))
            .and(query_param_is_missing("limit"))
            .and(query_param_is_missing("q"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);
        let result = sets.get_all(&QueryOptions::default()).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_search_installs_q() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/characteristicSets"))
            .and(query_param("q", "CODE eq 'test'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![sample("test")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);
        let criteria = SearchCriteria::new().field("code", "test");
        let result = sets.search(&criteria, QueryOptions::default()).await.unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_search_caller_q_wins() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/characteristicSets"))
            .and(query_param("q", "AUXIL_CODE eq 'X'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);
        let criteria = SearchCriteria::new().field("code", "ignored");
        let options = QueryOptions::default().q("AUXIL_CODE eq 'X'");
        sets.search(&criteria, options).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_criteria_search_sends_no_q() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/characteristicSets"))
            .and(query_param_is_missing("q"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);
        sets.search(&SearchCriteria::new(), QueryOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/characteristicSets"))
            .respond_with(ResponseTemplate::new(201).set_body_json(sample("CS-9")))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/characteristicSets/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let sets = CharacteristicSets::new(&client);

        let created = sets.create(&sample("CS-9")).await.unwrap();
        assert_eq!(created.internal_reference, Some(1));
        sets.delete(1).await.unwrap();
    }
}
