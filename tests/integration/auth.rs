use chrono::{Duration, Utc};

use amocrm_api::auth::{FileTokenStorage, OAuthClient, OAuthConfig, StoredToken, TokenStorage};
use amocrm_api::{AmoRestClient, Credentials, ListOptions};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::envelope;

fn oauth() -> OAuthClient {
    OAuthClient::new(OAuthConfig::new(
        "integration-id",
        "integration-secret",
        "https://example.com/oauth/callback",
    ))
}

#[tokio::test]
async fn test_auth_code_exchange_store_and_reuse() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/access_token"))
        .and(body_partial_json(serde_json::json!({"grant_type": "authorization_code"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "expires_in": 86400,
            "access_token": "issued-access",
            "refresh_token": "issued-refresh"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .and(header("authorization", "Bearer issued-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "users",
            1,
            serde_json::json!([{"id": 1, "name": "Admin"}]),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = oauth()
        .exchange_code("code-from-redirect", &mock_server.uri())
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let storage = FileTokenStorage::with_path(dir.path());
    storage
        .save("example", &StoredToken::new(mock_server.uri(), token))
        .unwrap();

    let stored = storage.load("example").unwrap().unwrap();
    let creds = stored.to_credentials();
    assert_eq!(creds.access_token(), "issued-access");

    let client = AmoRestClient::from_credentials(&creds).unwrap();
    let users = client.list_users(&ListOptions::new()).await.unwrap();
    assert_eq!(users.items()[0].name, "Admin");
}

#[tokio::test]
async fn test_auth_refresh_then_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/access_token"))
        .and(body_partial_json(serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": "old-refresh"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "expires_in": 86400,
            "access_token": "fresh-access",
            "refresh_token": "fresh-refresh"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/leads/pipelines"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "pipelines",
            1,
            serde_json::json!([{"id": 1, "name": "Main", "is_main": true}]),
        )))
        .mount(&mock_server)
        .await;

    let mut creds = amocrm_api::AmoCredentials::new(mock_server.uri(), "stale-access")
        .with_refresh_token("old-refresh")
        .with_expires_at(Utc::now() - Duration::hours(1));
    assert!(creds.is_expired());
    assert!(AmoRestClient::from_credentials(&creds).is_err());

    oauth().refresh_credentials(&mut creds).await.unwrap();
    assert!(!creds.is_expired());

    let client = AmoRestClient::from_credentials(&creds).unwrap();
    let pipelines = client.list_pipelines().await.unwrap();
    assert!(pipelines[0].is_main);
}
