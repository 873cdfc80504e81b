use tracing::instrument;

use amocrm_client::EmbeddedPage;
use amocrm_filters::EntityFilter;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{Contact, CreatedEntity};

impl super::AmoRestClient {
    /// List contacts.
    #[instrument(skip(self))]
    pub async fn list_contacts(&self, options: &ListOptions) -> Result<EmbeddedPage<Contact>> {
        self.list_entities("contacts", "contacts", options).await
    }

    /// List contacts using the filters of a contacts list URL from the web UI.
    #[instrument(skip(self))]
    pub async fn list_contacts_from_url(&self, raw_url: &str) -> Result<EmbeddedPage<Contact>> {
        let filter = EntityFilter::contacts(raw_url)?;
        self.list_contacts(&ListOptions::from_entity_filter(&filter)).await
    }

    /// Get a contact by ID.
    #[instrument(skip(self))]
    pub async fn get_contact(&self, id: u64, with: &[&str]) -> Result<Contact> {
        self.get_entity(&format!("contacts/{}", id), with).await
    }

    /// Create contacts in one batch.
    #[instrument(skip(self, contacts), fields(count = contacts.len()))]
    pub async fn create_contacts(&self, contacts: &[Contact]) -> Result<Vec<CreatedEntity>> {
        self.create_entities("contacts", "contacts", contacts).await
    }
}
