use tracing::instrument;

use amocrm_client::EmbeddedPage;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{Company, CreatedEntity};

impl super::AmoRestClient {
    #[instrument(skip(self))]
    pub async fn list_companies(&self, options: &ListOptions) -> Result<EmbeddedPage<Company>> {
        self.list_entities("companies", "companies", options).await
    }

    #[instrument(skip(self))]
    pub async fn get_company(&self, id: u64, with: &[&str]) -> Result<Company> {
        self.get_entity(&format!("companies/{}", id), with).await
    }

    #[instrument(skip(self, companies), fields(count = companies.len()))]
    pub async fn create_companies(&self, companies: &[Company]) -> Result<Vec<CreatedEntity>> {
        self.create_entities("companies", "companies", companies).await
    }
}
