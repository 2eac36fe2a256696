//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct: the single HTTP
//! collaborator every entity client forwards to. It owns the base URL,
//! authentication, and timeout configuration; the entity clients own the
//! paths and query strings they pass in.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{instrument, Span};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::error::{ApiError, AuthError, ClientError};
use crate::method::RestMethod;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClientBuilder {
    fn new(mut base_url: Url) -> Self {
        // Relative joins drop the last path segment unless the base ends
        // with a slash, so `https://host/api/v2` becomes `.../api/v2/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
        }
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder(base_url)
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication method and API key.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use erp_api::ApiAuthMethod;
    ///
    /// let client = ApiClient::builder(base_url)
    ///     .auth(ApiAuthMethod::Bearer, "sk-xxx")
    ///     .build()?;
    /// ```
    pub fn auth(mut self, method: ApiAuthMethod, api_key: impl Into<String>) -> Self {
        self.auth = Some((method, api_key.into()));
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            auth: self.auth,
        })
    }
}

/// Async HTTP client for the ERP API.
///
/// Wraps `reqwest::Client` with connection pooling, base-URL joining, auth
/// handling, and JSON decoding. Entity clients hold a shared reference to
/// one `ApiClient` and pass it fully built paths (query string included).
///
/// ## Examples
///
/// ```rust,no_run
/// use erp_api::{ApiClient, RestMethod};
/// use url::Url;
///
/// #[derive(serde::Deserialize)]
/// struct Discount { #[serde(rename = "CODE")] code: String }
///
/// # async fn example() -> Result<(), erp_api::ApiError> {
/// let base_url = Url::parse("https://erp.example.com/api/v2/").unwrap();
/// let client = ApiClient::new(base_url)?;
///
/// let discount: Discount = client
///     .request(RestMethod::Get, "salesDiscounts/1", None)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes a request and decodes the JSON response into `T`.
    ///
    /// `path` is joined onto the base URL and may carry a query string; the
    /// URL layer percent-encodes it. `body`, when given, is sent as JSON.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The request fails (network, timeout, etc.)
    /// - The server returns a non-success status code
    /// - The response body cannot be decoded into `T`
    #[instrument(
        name = "api_request",
        skip(self, body),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn request<T>(
        &self,
        method: RestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        let bytes = response.bytes().await.map_err(ClientError::Request)?;
        let parsed = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    /// Executes a request whose response body is empty or irrelevant
    /// (DELETE-style endpoints).
    ///
    /// ## Errors
    ///
    /// Returns an error if the request fails or the server returns a
    /// non-success status code.
    #[instrument(
        name = "api_request",
        skip(self, body),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn request_empty(
        &self,
        method: RestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, body).await?;
        Ok(())
    }

    /// Builds, authenticates, and sends the request; maps non-success
    /// statuses into the error taxonomy.
    async fn send(
        &self,
        method: RestMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ApiError> {
        // A leading slash would make `Url::join` discard the base URL's
        // path prefix (e.g. `/api/v2/`), so join relative to it instead.
        let full_url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Connection(format!("invalid URL: {e}")))?;
        Span::current().record("http.url", full_url.as_str());

        let mut request = self.client.request(method.to_reqwest(), full_url);
        request = self.apply_auth(request)?;
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            if status_code == 401 {
                return Err(AuthError::AuthenticationFailed { message }.into());
            }
            if status_code == 403 {
                return Err(AuthError::InsufficientPermissions {
                    operation: path.to_string(),
                }
                .into());
            }

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Ok(response)
    }

    /// Applies authentication to a request builder based on the configured
    /// auth method.
    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some((method, api_key)) = &self.auth else {
            return Ok(request);
        };

        match method {
            ApiAuthMethod::Bearer => {
                let header_value = format!("Bearer {api_key}");
                Ok(request.header(AUTHORIZATION, header_value))
            }
            ApiAuthMethod::ApiKey(header_name) => {
                let name = HeaderName::try_from(header_name.as_str())
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                Ok(request.header(name, api_key.as_str()))
            }
            ApiAuthMethod::None => Ok(request),
        }
    }
}
