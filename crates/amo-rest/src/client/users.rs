use tracing::instrument;

use amocrm_client::EmbeddedPage;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::User;

impl super::AmoRestClient {
    /// List account users. Use `with_relation("role")` / `"group"` to embed extras.
    #[instrument(skip(self))]
    pub async fn list_users(&self, options: &ListOptions) -> Result<EmbeddedPage<User>> {
        self.list_entities("users", "users", options).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64, with: &[&str]) -> Result<User> {
        self.get_entity(&format!("users/{}", id), with).await
    }
}
