use amocrm_api::rest::ErrorKind;
use amocrm_api::{EntityFilter, ListOptions};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{envelope, rest_client, ACCESS_TOKEN};

#[tokio::test]
async fn test_rest_lead_list_url_to_api_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/leads"))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("filter[name]", "Test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "leads",
            2,
            serde_json::json!([{"id": 11, "name": "Test", "price": 1000}]),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = rest_client(&mock_server);
    let page = client
        .list_leads_from_url("https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2&limit=25")
        .await
        .unwrap();

    assert_eq!(page.page(), Some(2));
    assert_eq!(page.items()[0].price, Some(1000));
}

#[tokio::test]
async fn test_rest_filter_combined_with_extra_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/contacts"))
        .and(query_param("filter[name]", "Иван"))
        .and(query_param("with", "leads"))
        .and(query_param("order[updated_at]", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "contacts",
            1,
            serde_json::json!([{"id": 3, "name": "Иван"}]),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let filter = EntityFilter::contacts("https://example.amocrm.ru/contacts/list/?filter[name]=Иван").unwrap();
    let options = ListOptions::from_entity_filter(&filter)
        .with_relation("leads")
        .with_order("updated_at", amocrm_api::rest::SortDirection::Desc);

    let client = rest_client(&mock_server);
    let page = client.list_contacts(&options).await.unwrap();
    assert_eq!(page.items()[0].name.as_deref(), Some("Иван"));
}

#[tokio::test]
async fn test_rest_empty_result_is_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/companies"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = rest_client(&mock_server);
    let page = client.list_companies(&ListOptions::new()).await.unwrap();
    assert!(page.is_empty());
    assert!(page.next_href().is_none());
}

#[tokio::test]
async fn test_rest_rejected_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/leads"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "title": "Unauthorized",
            "type": "https://httpstatus.es/401",
            "status": 401,
            "detail": "Неверный логин или пароль"
        })))
        .mount(&mock_server)
        .await;

    let client = rest_client(&mock_server);
    let err = client.list_leads(&ListOptions::new()).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Client(_)));
    assert_eq!(err.status(), Some(401));
    assert!(!err.to_string().contains(ACCESS_TOKEN));
}

#[tokio::test]
async fn test_rest_wrong_entity_url_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = rest_client(&mock_server);
    let err = client
        .list_contacts_from_url("https://example.amocrm.ru/leads/list/")
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Filter(_)));
}
