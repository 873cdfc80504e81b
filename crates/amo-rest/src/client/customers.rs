use tracing::instrument;

use amocrm_client::EmbeddedPage;
use amocrm_filters::EntityFilter;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::Customer;

impl super::AmoRestClient {
    /// List customers. The customers feature must be enabled on the account.
    #[instrument(skip(self))]
    pub async fn list_customers(&self, options: &ListOptions) -> Result<EmbeddedPage<Customer>> {
        self.list_entities("customers", "customers", options).await
    }

    /// List customers using the filters of a customers list URL from the web UI.
    #[instrument(skip(self))]
    pub async fn list_customers_from_url(&self, raw_url: &str) -> Result<EmbeddedPage<Customer>> {
        let filter = EntityFilter::customers(raw_url)?;
        self.list_customers(&ListOptions::from_entity_filter(&filter)).await
    }
}
