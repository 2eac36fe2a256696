//! Client for the payment difference invoices endpoint family.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::query::{append_query, build_query_string, build_search_query, QueryOptions, SearchCriteria};
use crate::response::ListResponse;

const BASE_PATH: &str = "/paymentDifferenceInvoices";

/// An invoice issued for a payment difference (exchange-rate or rounding
/// gap between an invoice and its settlement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDifferenceInvoice {
    #[serde(rename = "INTERNAL_REFERENCE", skip_serializing_if = "Option::is_none")]
    pub internal_reference: Option<u64>,
    #[serde(rename = "NUMBER")]
    pub number: String,
    /// Invoice date, `YYYY-MM-DD`.
    #[serde(rename = "DATE", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "CUSTOMER_CODE", skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    #[serde(rename = "GROSS_TOTAL", skip_serializing_if = "Option::is_none")]
    pub gross_total: Option<f64>,
    /// 0 = debit difference, 1 = credit difference.
    #[serde(rename = "DIFF_TYPE", skip_serializing_if = "Option::is_none")]
    pub diff_type: Option<i32>,
    #[serde(rename = "RECORD_STATUS", skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Handle for the `/paymentDifferenceInvoices` endpoints.
pub struct PaymentDifferenceInvoices<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentDifferenceInvoices<'a> {
    /// Creates a handle over `client`.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists payment difference invoices.
    pub async fn get_all(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<PaymentDifferenceInvoice>, ApiError> {
        let path = append_query(BASE_PATH, &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Fetches one invoice by record id.
    pub async fn get_by_id(
        &self,
        id: u64,
        options: &QueryOptions,
    ) -> Result<PaymentDifferenceInvoice, ApiError> {
        let path = append_query(&format!("{BASE_PATH}/{id}"), &build_query_string(options));
        self.client.request(RestMethod::Get, &path, None).await
    }

    /// Creates an invoice; returns the stored record.
    pub async fn create(
        &self,
        body: &PaymentDifferenceInvoice,
    ) -> Result<PaymentDifferenceInvoice, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Post, BASE_PATH, Some(&body))
            .await
    }

    /// Replaces the invoice with record id `id`.
    pub async fn update(
        &self,
        id: u64,
        body: &PaymentDifferenceInvoice,
    ) -> Result<PaymentDifferenceInvoice, ApiError> {
        let body = serde_json::to_value(body)?;
        self.client
            .request(RestMethod::Put, &format!("{BASE_PATH}/{id}"), Some(&body))
            .await
    }

    /// Deletes the invoice with record id `id`.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client
            .request_empty(RestMethod::Delete, &format!("{BASE_PATH}/{id}"), None)
            .await
    }

    /// Lists invoices matching `criteria`; a `q` already present in
    /// `options` wins over the criteria.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<ListResponse<PaymentDifferenceInvoice>, ApiError> {
        let mut options = options;
        if options.q.is_none() {
            options.q = build_search_query(criteria);
        }
        self.get_all(&options).await
    }

    /// Convenience: invoices for one customer within a date range.
    pub async fn search_by_customer(
        &self,
        customer_code: &str,
        from: Option<&str>,
        to: Option<&str>,
        options: QueryOptions,
    ) -> Result<ListResponse<PaymentDifferenceInvoice>, ApiError> {
        use crate::query::OperatorSet;

        let mut range = OperatorSet::new();
        if let Some(from) = from {
            range = range.gte(from);
        }
        if let Some(to) = to {
            range = range.lte(to);
        }
        let criteria = SearchCriteria::new()
            .field("customerCode", customer_code)
            .field("date", range);
        self.search(&criteria, options).await
    }

    /// Posts the invoice to the ledger; returns the updated record.
    pub async fn post_to_ledger(&self, id: u64) -> Result<PaymentDifferenceInvoice, ApiError> {
        self.client
            .request(
                RestMethod::Post,
                &format!("{BASE_PATH}/{id}/postToLedger"),
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_by_customer_with_open_range() {
        let mock_server = MockServer::start().await;

        // No `to` bound: only the customer clause and the gte clause emit.
        Mock::given(method("GET"))
            .and(path("/paymentDifferenceInvoices"))
            .and(query_param(
                "q",
                "CUSTOMER_CODE eq 'C-100' and DATE gte '2026-01-01'",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(ListResponse {
                items: Vec::<PaymentDifferenceInvoice>::new(),
                count: None,
            }))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
        let invoices = PaymentDifferenceInvoices::new(&client);
        invoices
            .search_by_customer("C-100", Some("2026-01-01"), None, QueryOptions::default())
            .await
            .unwrap();
    }
}
