use tracing::instrument;

use amocrm_client::EmbeddedPage;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{Catalog, CatalogElement};

impl super::AmoRestClient {
    /// List catalogs (lists) of the account.
    #[instrument(skip(self))]
    pub async fn list_catalogs(&self, options: &ListOptions) -> Result<EmbeddedPage<Catalog>> {
        self.list_entities("catalogs", "catalogs", options).await
    }

    /// List the elements of one catalog.
    #[instrument(skip(self))]
    pub async fn list_catalog_elements(
        &self,
        catalog_id: u64,
        options: &ListOptions,
    ) -> Result<EmbeddedPage<CatalogElement>> {
        let path = format!("catalogs/{}/elements", catalog_id);
        self.list_entities(&path, "elements", options).await
    }
}
