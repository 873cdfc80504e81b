use tracing::instrument;

use amocrm_client::EmbeddedPage;

use super::ensure_entity_segment;
use crate::error::Result;
use crate::options::ListOptions;
use crate::types::Tag;

impl super::AmoRestClient {
    /// List tags of an entity type.
    #[instrument(skip(self))]
    pub async fn list_tags(&self, entity: &str, options: &ListOptions) -> Result<EmbeddedPage<Tag>> {
        ensure_entity_segment(entity)?;
        self.list_entities(&format!("{}/tags", entity), "tags", options)
            .await
    }

    /// Create tags for an entity type. Returns the tags with their new IDs.
    #[instrument(skip(self, tags), fields(count = tags.len()))]
    pub async fn add_tags(&self, entity: &str, tags: &[Tag]) -> Result<Vec<Tag>> {
        ensure_entity_segment(entity)?;
        let url = self.client.api_url(&format!("{}/tags", entity));
        let page: EmbeddedPage<Tag> = self.client.post_page(&url, "tags", &tags).await?;
        Ok(page.into_items())
    }
}
