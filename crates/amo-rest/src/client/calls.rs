use tracing::instrument;

use crate::error::Result;
use crate::types::{Call, CreatedEntity};

impl super::AmoRestClient {
    /// Log calls. amoCRM attaches each call to the contact or company
    /// owning the phone number.
    #[instrument(skip(self, calls), fields(count = calls.len()))]
    pub async fn add_calls(&self, calls: &[Call]) -> Result<Vec<CreatedEntity>> {
        self.create_entities("calls", "calls", calls).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::client_for;
    use crate::error::ErrorKind;
    use crate::{Call, CallDirection};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn call() -> Call {
        Call {
            direction: CallDirection::Outbound,
            phone: "+79991234567".to_string(),
            duration: 120,
            source: "example_telephony".to_string(),
            uniq: Some("call-1".to_string()),
            link: None,
            call_result: Some("Reached".to_string()),
            call_status: Some(4),
            responsible_user_id: None,
            created_at: None,
            request_id: None,
        }
    }

    #[tokio::test]
    async fn test_add_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v4/calls"))
            .and(body_json(serde_json::json!([{
                "direction": "outbound",
                "phone": "+79991234567",
                "duration": 120,
                "source": "example_telephony",
                "uniq": "call-1",
                "call_result": "Reached",
                "call_status": 4
            }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "_embedded": {"calls": [
                    {"id": 900, "entity_id": 3, "entity_type": "contact", "request_id": "0"}
                ]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let created = client.add_calls(&[call()]).await.unwrap();

        assert_eq!(created[0].id, 900);
        assert_eq!(created[0].entity_id, Some(3));
    }

    #[tokio::test]
    async fn test_add_calls_validation_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v4/calls"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("content-type", "application/problem+json")
                    .set_body_json(serde_json::json!({
                        "title": "Bad Request",
                        "status": 400,
                        "validation-errors": [{
                            "request_id": "0",
                            "errors": [{"code": "NotSupportedChoice", "path": "direction", "detail": "bad"}]
                        }]
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.add_calls(&[call()]).await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Client(_)));
        let source = err
            .source
            .as_ref()
            .and_then(|s| s.downcast_ref::<amocrm_client::Error>())
            .unwrap();
        match &source.kind {
            amocrm_client::ErrorKind::AmoApi { validation_errors, .. } => {
                assert_eq!(validation_errors[0].path, "direction");
                assert_eq!(validation_errors[0].request_id.as_deref(), Some("0"));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
