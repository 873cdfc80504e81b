use tracing::instrument;

use amocrm_client::EmbeddedPage;
use amocrm_filters::EntityFilter;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{CreatedEntity, Task};

impl super::AmoRestClient {
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, options: &ListOptions) -> Result<EmbeddedPage<Task>> {
        self.list_entities("tasks", "tasks", options).await
    }

    /// List tasks using the filters of a tasks list URL from the web UI.
    #[instrument(skip(self))]
    pub async fn list_tasks_from_url(&self, raw_url: &str) -> Result<EmbeddedPage<Task>> {
        let filter = EntityFilter::tasks(raw_url)?;
        self.list_tasks(&ListOptions::from_entity_filter(&filter)).await
    }

    /// Create tasks. Each task needs `text` and `complete_till`.
    #[instrument(skip(self, tasks), fields(count = tasks.len()))]
    pub async fn create_tasks(&self, tasks: &[Task]) -> Result<Vec<CreatedEntity>> {
        self.create_entities("tasks", "tasks", tasks).await
    }

    /// Update tasks, e.g. to complete them with a result.
    #[instrument(skip(self, tasks), fields(count = tasks.len()))]
    pub async fn update_tasks(&self, tasks: &[Task]) -> Result<Vec<Task>> {
        self.update_entities("tasks", "tasks", tasks).await
    }
}
