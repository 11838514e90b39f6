//! Construction and identity-bootstrap behavior.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yandex_webmaster::{ClientConfig, Error, WebmasterClient};

#[tokio::test]
async fn resolves_user_id_and_scopes_the_host_list() {
    let server = MockServer::start().await;
    // The service reports large ids as strings; the client must accept both.
    Mock::given(method("GET"))
        .and(path("/user/"))
        .and(header("Authorization", "OAuth test-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": "12345" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/12345/hosts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hosts": [] })))
        .mount(&server)
        .await;

    let client = WebmasterClient::init_with_config("test-token", ClientConfig::new(server.uri()))
        .await
        .unwrap();
    assert_eq!(client.user_id(), 12345);

    let hosts = client.get_hosts().await.unwrap();
    assert_eq!(hosts["hosts"], json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url.path(), "/user/12345/hosts/");
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn invalid_token_fails_construction_with_the_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": "INVALID_OAUTH_TOKEN",
            "error_message": "OAuth token is expired"
        })))
        .mount(&server)
        .await;

    let result =
        WebmasterClient::init_with_config("stale-token", ClientConfig::new(server.uri())).await;
    match result {
        Err(Error::Api { code, message }) => {
            assert_eq!(code, "INVALID_OAUTH_TOKEN");
            assert_eq!(message, "OAuth token is expired");
        }
        other => panic!("expected the upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_user_id_fails_construction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": 0 })))
        .mount(&server)
        .await;

    let result =
        WebmasterClient::init_with_config("test-token", ClientConfig::new(server.uri())).await;
    assert!(matches!(result, Err(Error::MalformedResponse(_))));
}

#[tokio::test]
async fn missing_user_id_fails_construction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "someone" })))
        .mount(&server)
        .await;

    let result =
        WebmasterClient::init_with_config("test-token", ClientConfig::new(server.uri())).await;
    match result {
        Err(error) => {
            assert!(matches!(error, Error::MalformedResponse(_)));
            assert!(!error.to_string().is_empty());
            assert_eq!(error.code(), "CRITICAL_ERROR");
        }
        Ok(_) => panic!("construction must not succeed without a user id"),
    }
}

#[tokio::test]
async fn invalid_base_url_fails_before_any_request() {
    let result = WebmasterClient::init_with_config("test-token", ClientConfig::new("")).await;
    assert!(matches!(result, Err(Error::InvalidConfig(_))));

    let result =
        WebmasterClient::init_with_config("test-token", ClientConfig::new("ftp://example.com"))
            .await;
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
