use tracing::instrument;

use amocrm_client::EmbeddedPage;

use crate::error::Result;
use crate::options::ListOptions;
use crate::types::Event;

impl super::AmoRestClient {
    /// List account events (field changes, status moves, incoming calls, ...).
    #[instrument(skip(self))]
    pub async fn list_events(&self, options: &ListOptions) -> Result<EmbeddedPage<Event>> {
        self.list_entities("events", "events", options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client_for;
    use crate::ListOptions;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/events"))
            .and(query_param("filter[type]", "lead_status_changed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_page": 1,
                "_embedded": {"events": [{
                    "id": "01pz58t6p04vgd8asq8v6ya1zt",
                    "type": "lead_status_changed",
                    "entity_id": 19619,
                    "entity_type": "lead",
                    "created_at": 1700000000,
                    "value_after": [{"lead_status": {"id": 142, "pipeline_id": 1300}}],
                    "value_before": [{"lead_status": {"id": 141, "pipeline_id": 1300}}]
                }]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let page = client
            .list_events(&ListOptions::new().with_filter("filter[type]", "lead_status_changed"))
            .await
            .unwrap();

        let event = &page.items()[0];
        assert_eq!(event.event_type, "lead_status_changed");
        assert_eq!(event.value_after[0]["lead_status"]["id"], 142);
    }
}
