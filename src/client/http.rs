//! HTTP client implementation.
//!
//! Provides the [`WebmasterClient`] with its fallible async factory, the
//! GET/POST/DELETE transport, and the uniform response shaping shared by
//! every operation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde_json::Value;

use super::config::ClientConfig;
use super::query::{self, Query};
use crate::diagnostics::DiagnosticsSink;
use crate::error::Error;

/// Identity resource; the only one requested without user scoping.
const USER_RESOURCE: &str = "/user/";

/// Client for the Webmaster API.
///
/// A value of this type always carries a resolved user id: construction
/// performs the identity bootstrap and fails if the access token cannot be
/// mapped to one, so a half-usable client cannot exist.
///
/// Every operation issues exactly one HTTP request and returns either the
/// endpoint's JSON payload or an [`Error`]; service-reported errors are
/// forwarded verbatim as [`Error::Api`].
#[derive(Debug, Clone)]
pub struct WebmasterClient {
    http: reqwest::Client,
    config: ClientConfig,
    user_id: u64,
}

impl WebmasterClient {
    /// Creates a client with the default configuration and resolves the
    /// user id behind the given OAuth access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the identity
    /// call fails, or its response does not contain a positive user id.
    pub async fn init(access_token: impl Into<String>) -> Result<Self, Error> {
        Self::init_with_config(access_token, ClientConfig::default()).await
    }

    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// As [`WebmasterClient::init`], plus [`Error::InvalidConfig`] when the
    /// configuration does not validate.
    pub async fn init_with_config(
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, Error> {
        let sink = Arc::clone(&config.diagnostics);
        config.validate().map_err(|e| fail(&*sink, e))?;
        let http = build_http(&access_token.into(), &config).map_err(|e| fail(&*sink, e))?;

        let url = format!("{}{}", config.base_url, USER_RESOURCE);
        tracing::debug!(%url, "resolving user id");
        let response = send(http.get(&url), &*sink).await?;
        let identity = shape(response, &*sink).await?;
        let user_id = parse_user_id(&identity).ok_or_else(|| {
            fail(
                &*sink,
                Error::MalformedResponse(
                    "identity response did not contain a positive user_id".to_string(),
                ),
            )
        })?;

        Ok(Self {
            http,
            config,
            user_id,
        })
    }

    /// Returns the user id resolved at construction.
    #[must_use]
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/user/{}{}", self.config.base_url, self.user_id, resource)
    }

    fn sink(&self) -> &dyn DiagnosticsSink {
        &*self.config.diagnostics
    }

    /// Issues a GET request for a user-scoped resource.
    pub(crate) async fn get(&self, resource: &str, query: &Query) -> Result<Value, Error> {
        let url = self.resource_url(resource);
        tracing::debug!(%url, "GET");
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        let response = send(request, self.sink()).await?;
        shape(response, self.sink()).await
    }

    /// Issues a POST request with a JSON object body.
    pub(crate) async fn post(
        &self,
        resource: &str,
        query: &Query,
        body: &Value,
    ) -> Result<Value, Error> {
        let url = self.resource_url(resource);
        tracing::debug!(%url, "POST");
        let mut request = self.http.post(&url).json(body);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        let response = send(request, self.sink()).await?;
        shape(response, self.sink()).await
    }

    /// Issues a DELETE request.
    ///
    /// A bare `204 No Content` answer maps to `Ok(None)`; any other success
    /// payload is parsed as with the other verbs.
    pub(crate) async fn delete(&self, resource: &str) -> Result<Option<Value>, Error> {
        let url = self.resource_url(resource);
        tracing::debug!(%url, "DELETE");
        let request = self.http.delete(&url).json(&Value::Object(serde_json::Map::new()));
        let response = send(request, self.sink()).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        shape(response, self.sink()).await.map(Some)
    }

    /// Resolves pagination parameters against the endpoint bound.
    ///
    /// An omitted offset defaults to 0 and an omitted limit to the full page
    /// size; an out-of-bound limit is rejected before any request is issued.
    pub(crate) fn page(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        max: u32,
    ) -> Result<(u32, u32), Error> {
        let limit =
            query::check_limit(limit.unwrap_or(max), max).map_err(|e| fail(self.sink(), e))?;
        Ok((offset.unwrap_or(0), limit))
    }

    /// Resolves a defaulted date window, rejecting inverted ranges.
    pub(crate) fn window(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<(String, String), Error> {
        query::date_window(from, to).map_err(|e| fail(self.sink(), e))
    }

    /// Resolves an optional date window, rejecting inverted ranges.
    pub(crate) fn optional_window(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<(Option<String>, Option<String>), Error> {
        query::optional_date_window(from, to).map_err(|e| fail(self.sink(), e))
    }
}

fn build_http(access_token: &str, config: &ClientConfig) -> Result<reqwest::Client, Error> {
    let mut auth = HeaderValue::from_str(&format!("OAuth {access_token}"))
        .map_err(|_| Error::InvalidConfig("access token is not a valid header value".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .user_agent(&config.user_agent)
        .redirect(Policy::none())
        .build()
        .map_err(Error::Request)
}

/// Records a client-detected failure into the diagnostics sink.
fn fail(sink: &dyn DiagnosticsSink, error: Error) -> Error {
    sink.critical(&error.to_string());
    error
}

async fn send(
    request: reqwest::RequestBuilder,
    sink: &dyn DiagnosticsSink,
) -> Result<reqwest::Response, Error> {
    request.send().await.map_err(|e| fail(sink, Error::Request(e)))
}

/// Normalizes a response into the payload-or-error envelope.
///
/// The body must be non-empty JSON object text; redirects are refused. An
/// object carrying a non-empty `error_code` is the service's own error and
/// is passed through untouched, without hitting the diagnostics sink.
pub(crate) async fn shape(
    response: reqwest::Response,
    sink: &dyn DiagnosticsSink,
) -> Result<Value, Error> {
    let status = response.status();
    let url = response.url().clone();

    if status.is_redirection() {
        return Err(fail(
            sink,
            Error::Transport(format!("refusing to follow redirect {status} from {url}")),
        ));
    }

    let body = response.text().await.map_err(|e| fail(sink, Error::Request(e)))?;
    if body.is_empty() {
        return Err(fail(
            sink,
            Error::Transport(format!("empty response from {url}")),
        ));
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        fail(
            sink,
            Error::MalformedResponse(format!("invalid JSON from {url}: {e}")),
        )
    })?;
    if !value.is_object() {
        return Err(fail(
            sink,
            Error::MalformedResponse(format!("response from {url} is not a JSON object")),
        ));
    }

    if let Some(code) = value.get("error_code").and_then(Value::as_str) {
        if !code.is_empty() {
            let message = value
                .get("error_message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(Error::Api {
                code: code.to_string(),
                message,
            });
        }
    }

    Ok(value)
}

fn parse_user_id(identity: &Value) -> Option<u64> {
    match identity.get("user_id")? {
        Value::Number(id) => id.as_u64().filter(|id| *id > 0),
        Value::String(id) => id.parse::<u64>().ok().filter(|id| *id > 0),
        _ => None,
    }
}
