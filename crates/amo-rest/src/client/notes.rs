use tracing::instrument;

use amocrm_client::EmbeddedPage;

use super::ensure_entity_segment;
use crate::error::Result;
use crate::options::ListOptions;
use crate::types::{CreatedEntity, Note};

impl super::AmoRestClient {
    /// List notes of an entity type (`leads`, `contacts`, `companies`, `customers`).
    #[instrument(skip(self))]
    pub async fn list_notes(&self, entity: &str, options: &ListOptions) -> Result<EmbeddedPage<Note>> {
        ensure_entity_segment(entity)?;
        self.list_entities(&format!("{}/notes", entity), "notes", options)
            .await
    }

    /// Add notes to entities of one type.
    #[instrument(skip(self, notes), fields(count = notes.len()))]
    pub async fn add_notes(&self, entity: &str, notes: &[Note]) -> Result<Vec<CreatedEntity>> {
        ensure_entity_segment(entity)?;
        self.create_entities(&format!("{}/notes", entity), "notes", notes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client_for;
    use crate::error::ErrorKind;
    use crate::{ListOptions, Note};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_notes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v4/contacts/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": {"notes": [{
                    "id": 1,
                    "entity_id": 3,
                    "note_type": "common",
                    "params": {"text": "hello"}
                }]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let page = client.list_notes("contacts", &ListOptions::new()).await.unwrap();

        assert_eq!(page.items()[0].params["text"], "hello");
    }

    #[tokio::test]
    async fn test_add_notes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v4/leads/notes"))
            .and(body_json(serde_json::json!([{
                "entity_id": 42,
                "note_type": "common",
                "params": {"text": "Called back"}
            }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": {"notes": [{"id": 500, "entity_id": 42, "request_id": "0"}]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let created = client
            .add_notes("leads", &[Note::common(42, "Called back")])
            .await
            .unwrap();

        assert_eq!(created[0].id, 500);
        assert_eq!(created[0].entity_id, Some(42));
    }

    #[tokio::test]
    async fn test_notes_reject_unsafe_entity() {
        let client = crate::AmoRestClient::new("https://example.amocrm.ru", "t").unwrap();
        let err = client
            .list_notes("../users", &ListOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
    }
}
