//! Shared wiremock scaffolding for the integration suites.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yandex_webmaster::{ClientConfig, WebmasterClient};

/// User id the mocked identity endpoint resolves to.
pub const USER_ID: u64 = 12345;

/// Mounts the identity endpoint answering with [`USER_ID`].
pub async fn mock_identity(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": USER_ID })))
        .mount(server)
        .await;
}

/// Builds a client whose base URL points at the mock server.
pub async fn client_for(server: &MockServer) -> WebmasterClient {
    mock_identity(server).await;
    WebmasterClient::init_with_config("test-token", ClientConfig::new(server.uri()))
        .await
        .unwrap()
}
