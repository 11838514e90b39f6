//! Response shaping across the GET/POST/DELETE transport.

mod common;

use common::client_for;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yandex_webmaster::Error;

#[tokio::test]
async fn redirect_surfaces_as_transport_failure() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/diagnostics/"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "https://elsewhere"))
        .mount(&server)
        .await;

    let result = client.get_diagnostics("example.com").await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn empty_body_surfaces_as_transport_failure() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/summary/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(Vec::<u8>::new(), "application/json"))
        .mount(&server)
        .await;

    let result = client.get_host_summary("example.com").await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn non_object_body_surfaces_as_malformed_response() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/summary/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[1, 2, 3]", "application/json"))
        .mount(&server)
        .await;

    let result = client.get_host_summary("example.com").await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn invalid_json_surfaces_as_malformed_response() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/summary/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let result = client.get_host_summary("example.com").await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn upstream_error_object_passes_through_verbatim() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/summary/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error_code": "ACCESS_DENIED",
            "error_message": "host belongs to another user"
        })))
        .mount(&server)
        .await;

    match client.get_host_summary("example.com").await {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, "ACCESS_DENIED");
            assert_eq!(message, "host belongs to another user");
        }
        other => panic!("expected the upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_host_posts_the_url_and_returns_the_payload_unchanged() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("POST"))
        .and(path("/user/12345/hosts/"))
        .and(body_json(json!({ "host_url": "https://example.com" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "host_id": "https:example.com:443" })),
        )
        .mount(&server)
        .await;

    let payload = client.add_host("https://example.com").await.unwrap();
    assert_eq!(payload, json!({ "host_id": "https:example.com:443" }));
}

#[tokio::test]
async fn delete_with_no_content_returns_the_success_marker() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/user/12345/hosts/example.com/original-texts/6a7b8c/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let outcome = client
        .delete_original_text("example.com", "6a7b8c")
        .await
        .unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn delete_with_payload_returns_the_parsed_object() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/user/12345/hosts/example.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "queued" })))
        .mount(&server)
        .await;

    let outcome = client.delete_host("example.com").await.unwrap();
    assert_eq!(outcome, Some(json!({ "status": "queued" })));
}

#[tokio::test]
async fn delete_encodes_the_text_id_path_segment() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/user/12345/hosts/example.com/original-texts/my+text+id/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let outcome = client
        .delete_original_text("example.com", "my text id")
        .await
        .unwrap();
    assert!(outcome.is_none());
}

#[tokio::test]
async fn large_numeric_identifiers_keep_full_precision() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/example.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"host_id":"https:example.com:443","snapshot_id":98765432109876543210987654321}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let payload = client.get_host("example.com").await.unwrap();
    assert_eq!(
        serde_json::to_string(&payload["snapshot_id"]).unwrap(),
        "98765432109876543210987654321"
    );
}
