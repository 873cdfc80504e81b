use serde::Serialize;
use tracing::instrument;

use amocrm_client::EmbeddedPage;

use crate::error::{Error, ErrorKind, Result};
use crate::options::ListOptions;
use crate::types::Webhook;

#[derive(Serialize)]
struct WebhookRequest<'a> {
    destination: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<&'a [&'a str]>,
}

impl super::AmoRestClient {
    #[instrument(skip(self))]
    pub async fn list_webhooks(&self, options: &ListOptions) -> Result<EmbeddedPage<Webhook>> {
        self.list_entities("webhooks", "webhooks", options).await
    }

    /// Subscribe `destination` to the given events (`add_lead`, `status_lead`, ...).
    #[instrument(skip(self))]
    pub async fn subscribe_webhook(&self, destination: &str, settings: &[&str]) -> Result<Webhook> {
        ensure_destination(destination)?;
        if settings.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "webhook needs at least one event".to_string(),
            )));
        }
        let url = self.client.api_url("webhooks");
        let body = WebhookRequest {
            destination,
            settings: Some(settings),
        };
        self.client.post_json(&url, &body).await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn unsubscribe_webhook(&self, destination: &str) -> Result<()> {
        ensure_destination(destination)?;
        let url = self.client.api_url("webhooks");
        let body = WebhookRequest {
            destination,
            settings: None,
        };
        self.client
            .delete_json(&url, Some(&body))
            .await
            .map_err(Into::into)
    }
}

fn ensure_destination(destination: &str) -> Result<()> {
    if destination.starts_with("https://") || destination.starts_with("http://") {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::InvalidInput(
            "webhook destination must be an http(s) URL".to_string(),
        )))
    }
}
