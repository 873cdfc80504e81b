use tracing::instrument;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::Pipeline;

impl super::AmoRestClient {
    /// List lead pipelines with their statuses.
    #[instrument(skip(self))]
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let page = self
            .list_entities("leads/pipelines", "pipelines", &ListOptions::default())
            .await?;
        Ok(page.into_items())
    }

    #[instrument(skip(self))]
    pub async fn get_pipeline(&self, id: u64) -> Result<Pipeline> {
        self.get_entity(&format!("leads/pipelines/{}", id), &[]).await
    }
}
