use tracing::instrument;

use amocrm_client::EmbeddedPage;
use amocrm_filters::EntityFilter;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{CreatedEntity, Lead};

impl super::AmoRestClient {
    /// List leads.
    #[instrument(skip(self))]
    pub async fn list_leads(&self, options: &ListOptions) -> Result<EmbeddedPage<Lead>> {
        self.list_entities("leads", "leads", options).await
    }

    /// List leads using the filters of a leads list URL from the web UI.
    ///
    /// The URL must point at `/leads/list/`; page, limit and `filter...`
    /// parameters are carried over unchanged.
    #[instrument(skip(self))]
    pub async fn list_leads_from_url(&self, raw_url: &str) -> Result<EmbeddedPage<Lead>> {
        let filter = EntityFilter::leads(raw_url)?;
        self.list_leads(&ListOptions::from_entity_filter(&filter)).await
    }

    /// Get a lead by ID.
    ///
    /// `with` embeds related data (`contacts`, `catalog_elements`, ...).
    #[instrument(skip(self))]
    pub async fn get_lead(&self, id: u64, with: &[&str]) -> Result<Lead> {
        self.get_entity(&format!("leads/{}", id), with).await
    }

    /// Create leads in one batch.
    #[instrument(skip(self, leads), fields(count = leads.len()))]
    pub async fn create_leads(&self, leads: &[Lead]) -> Result<Vec<CreatedEntity>> {
        self.create_entities("leads", "leads", leads).await
    }

    /// Update leads in one batch. Every lead must carry its `id`.
    #[instrument(skip(self, leads), fields(count = leads.len()))]
    pub async fn update_leads(&self, leads: &[Lead]) -> Result<Vec<Lead>> {
        self.update_entities("leads", "leads", leads).await
    }
}
