//! High-level amoCRM client with typed HTTP methods.
//!
//! `AmoClient` combines an account base URL and access token with an HTTP
//! client. It is the request executor every endpoint crate calls into.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::AmoHttpClient;
use crate::config::ClientConfig;
use crate::envelope::EmbeddedPage;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// Authenticated amoCRM API client.
///
/// # Example
///
/// ```rust,ignore
/// use amocrm_client::AmoClient;
///
/// let client = AmoClient::new("https://example.amocrm.ru", access_token)?;
///
/// let account: serde_json::Value = client.get_json(&client.api_url("account")).await?;
/// ```
#[derive(Clone)]
pub struct AmoClient {
    http: AmoHttpClient,
    base_url: String,
    access_token: String,
    api_version: u32,
}

impl std::fmt::Debug for AmoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmoClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl AmoClient {
    /// Create a client for the account at `base_url` (e.g. `https://example.amocrm.ru`).
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, access_token, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(format!(
                "base URL must be http(s), got scheme '{}'",
                parsed.scheme()
            ))));
        }

        let api_version = config.api_version;
        let http = AmoHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
            api_version,
        })
    }

    /// Set the API version used in `/api/v{N}/` paths.
    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Replace the access token (e.g. after a refresh).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }

    /// Account base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// Absolute URLs are returned unchanged; anything else is appended to the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Build a REST API URL.
    ///
    /// Example: `api_url("leads")` -> `https://example.amocrm.ru/api/v4/leads`
    pub fn api_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/v{}/{}", self.base_url, self.api_version, path)
    }

    // =========================================================================
    // Base HTTP Methods (with authentication)
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(self.url(url)).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(self.url(url)).bearer_auth(&self.access_token)
    }

    /// Create a PATCH request builder with authentication.
    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.http.patch(self.url(url)).bearer_auth(&self.access_token)
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(self.url(url)).bearer_auth(&self.access_token)
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.execute(self.get(url)).await?;
        response.json().await
    }

    /// GET request returning `None` when the server answers 204 No Content.
    #[instrument(skip(self, query), fields(url = %url))]
    pub async fn get_json_opt<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Option<T>> {
        let request = self.get(url).query_pairs(query.iter().cloned());
        let response = self.http.execute(request).await?;
        response.json_opt().await
    }

    /// GET a collection and decode its `_embedded.<key>` envelope.
    ///
    /// A 204 No Content response decodes as an empty page.
    #[instrument(skip(self, query), fields(url = %url, key = %key))]
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        key: &str,
        query: &[(String, String)],
    ) -> Result<EmbeddedPage<T>> {
        let request = self.get(url).query_pairs(query.iter().cloned());
        let response = self.http.execute(request).await?;
        match response.json_opt::<serde_json::Value>().await? {
            Some(value) => EmbeddedPage::from_value(value, key),
            None => Ok(EmbeddedPage::empty()),
        }
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(url).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// POST a batch and decode the `_embedded.<key>` envelope of the response.
    #[instrument(skip(self, body), fields(url = %url, key = %key))]
    pub async fn post_page<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        key: &str,
        body: &B,
    ) -> Result<EmbeddedPage<T>> {
        let request = self.post(url).json(body)?;
        let response = self.http.execute(request).await?;
        match response.json_opt::<serde_json::Value>().await? {
            Some(value) => EmbeddedPage::from_value(value, key),
            None => Ok(EmbeddedPage::empty()),
        }
    }

    /// PATCH a batch and decode the `_embedded.<key>` envelope of the response.
    #[instrument(skip(self, body), fields(url = %url, key = %key))]
    pub async fn patch_page<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        key: &str,
        body: &B,
    ) -> Result<EmbeddedPage<T>> {
        let request = self.patch(url).json(body)?;
        let response = self.http.execute(request).await?;
        match response.json_opt::<serde_json::Value>().await? {
            Some(value) => EmbeddedPage::from_value(value, key),
            None => Ok(EmbeddedPage::empty()),
        }
    }

    /// PATCH request with JSON body and response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.patch(url).json(body)?;
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// DELETE request, optionally with a JSON body.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn delete_json<B: Serialize>(&self, url: &str, body: Option<&B>) -> Result<()> {
        let mut request = self.delete(url);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.http.execute(request).await?;
        Ok(())
    }
}
