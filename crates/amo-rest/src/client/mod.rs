//! amoCRM REST API client.
//!
//! This client wraps `AmoClient` from `amocrm-client` and provides
//! typed methods for the v4 entity endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use amocrm_auth::{AmoCredentials, Credentials};
use amocrm_client::security::is_safe_entity_segment;
use amocrm_client::{AmoClient, ClientConfig, EmbeddedPage};

use crate::error::{Error, ErrorKind, Result};
use crate::options::ListOptions;
use crate::types::CreatedEntity;

mod calls;
mod catalogs;
mod companies;
mod contacts;
mod customers;
mod events;
mod leads;
mod notes;
mod pipelines;
mod tags;
mod tasks;
mod users;
mod webhooks;

/// amoCRM REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use amocrm_rest::{AmoRestClient, ListOptions, Lead};
///
/// let client = AmoRestClient::new("https://example.amocrm.ru", "access_token_here")?;
///
/// // List
/// let page = client.list_leads(&ListOptions::new().with_limit(10)).await?;
///
/// // Straight from a list URL copied out of the browser
/// let page = client
///     .list_leads_from_url("https://example.amocrm.ru/leads/list/?filter[name]=Test")
///     .await?;
///
/// // Create
/// let created = client
///     .create_leads(&[Lead { name: Some("New deal".into()), ..Lead::default() }])
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AmoRestClient {
    client: AmoClient,
}

impl AmoRestClient {
    /// Create a new REST client with the given account URL and access token.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = AmoClient::new(base_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = AmoClient::with_config(base_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from stored or refreshed credentials.
    pub fn from_credentials(credentials: &AmoCredentials) -> Result<Self> {
        if !credentials.is_valid() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "credentials are missing a base URL or access token".to_string(),
            )));
        }
        let client = credentials.client()?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing AmoClient.
    pub fn from_client(client: AmoClient) -> Self {
        Self { client }
    }

    /// Get the underlying AmoClient.
    pub fn inner(&self) -> &AmoClient {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Replace the access token, e.g. after a refresh.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.client.set_access_token(token);
    }

    // =========================================================================
    // Shared plumbing for the entity modules
    // =========================================================================

    async fn list_entities<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        options: &ListOptions,
    ) -> Result<EmbeddedPage<T>> {
        let url = self.client.api_url(path);
        self.client
            .get_page(&url, key, &options.query_pairs())
            .await
            .map_err(Into::into)
    }

    async fn get_entity<T: DeserializeOwned>(&self, path: &str, with: &[&str]) -> Result<T> {
        let url = self.client.api_url(path);
        let query = if with.is_empty() {
            Vec::new()
        } else {
            vec![("with".to_string(), with.join(","))]
        };

        self.client
            .get_json_opt(&url, &query)
            .await?
            .ok_or_else(|| Error::new(ErrorKind::NotFound(path.to_string())))
    }

    async fn create_entities<B: Serialize>(
        &self,
        path: &str,
        key: &str,
        items: &[B],
    ) -> Result<Vec<CreatedEntity>> {
        ensure_not_empty(items)?;
        let url = self.client.api_url(path);
        let page: EmbeddedPage<CreatedEntity> = self.client.post_page(&url, key, &items).await?;
        Ok(page.into_items())
    }

    async fn update_entities<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        key: &str,
        items: &[B],
    ) -> Result<Vec<T>> {
        ensure_not_empty(items)?;
        let url = self.client.api_url(path);
        let page: EmbeddedPage<T> = self.client.patch_page(&url, key, &items).await?;
        Ok(page.into_items())
    }
}

/// Reject entity path segments that are not lowercase identifiers.
pub(crate) fn ensure_entity_segment(segment: &str) -> Result<()> {
    if is_safe_entity_segment(segment) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::InvalidInput(format!(
            "invalid entity type: {:?}",
            segment
        ))))
    }
}

fn ensure_not_empty<B>(items: &[B]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::new(ErrorKind::InvalidInput(
            "batch must contain at least one item".to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AmoRestClient;
    use wiremock::MockServer;

    pub(crate) fn client_for(server: &MockServer) -> AmoRestClient {
        AmoRestClient::new(server.uri(), "test-token").unwrap()
    }
}
