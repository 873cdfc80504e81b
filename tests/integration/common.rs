use amocrm_api::AmoRestClient;
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "integration-access-token";

/// A REST client pointed at `server`.
pub fn rest_client(server: &MockServer) -> AmoRestClient {
    AmoRestClient::new(server.uri(), ACCESS_TOKEN).expect("mock server URI is a valid base URL")
}

/// `_embedded` envelope around `items` under `key`.
pub fn envelope(key: &str, page: u32, items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "_page": page,
        "_links": {"self": {"href": format!("https://example.amocrm.ru/api/v4/{}?page={}", key, page)}},
        "_embedded": {key: items}
    })
}
