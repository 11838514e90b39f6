//! One-shot OAuth authorization-code exchange.
//!
//! Kept for initial token acquisition tooling only; steady-state use of the
//! client starts from an already-issued access token.

use reqwest::redirect::Policy;
use serde_json::Value;

use crate::client::http::shape;
use crate::diagnostics::NoopSink;
use crate::error::Error;

/// Yandex OAuth token endpoint.
const TOKEN_URL: &str = "https://oauth.yandex.ru/token";

/// Exchanges an OAuth authorization code for an access token.
///
/// Register an application with Webmaster permissions at the Yandex OAuth
/// console, send the user through the authorize URL, then trade the code it
/// hands back for a token here. The returned object is the token endpoint's
/// payload, `access_token` included, passed through verbatim.
///
/// # Errors
///
/// Returns an error if the exchange fails or the response is not a JSON
/// object.
#[deprecated(
    note = "debug tooling for initial token acquisition; production flows should run their own OAuth integration"
)]
pub async fn exchange_authorization_code(
    code: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Value, Error> {
    let http = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .map_err(Error::Request)?;

    let form = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", client_id),
        ("client_secret", client_secret),
    ];

    tracing::debug!(url = TOKEN_URL, "exchanging authorization code");
    let response = http
        .post(TOKEN_URL)
        .form(&form)
        .send()
        .await
        .map_err(Error::Request)?;

    shape(response, &NoopSink).await
}
