//! Client library for the Yandex.Webmaster REST API.
//!
//! This crate wraps the Webmaster API v4.1 (host indexing, search presence,
//! links, search queries, original texts, recrawl queue) behind a typed
//! async client. Construction exchanges an OAuth access token for the
//! caller's user id; afterwards every operation maps its parameters onto
//! exactly one HTTP request and returns the endpoint's JSON payload or a
//! typed [`Error`].
//!
//! Payload shapes are endpoint-specific and owned by the service, so
//! operations return them as [`serde_json::Value`] objects with numeric
//! identifiers preserved at full precision. Never hard-code host, user or
//! task ids: the service may change their format. Obtain them from
//! [`WebmasterClient::get_hosts`] and friends.
//!
//! # Example
//!
//! ```rust,ignore
//! use yandex_webmaster::WebmasterClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebmasterClient::init("my-oauth-token").await?;
//!
//!     let hosts = client.get_hosts().await?;
//!     println!("hosts: {hosts}");
//!
//!     let summary = client.get_host_summary("https:example.com:443").await?;
//!     println!("summary: {summary}");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod diagnostics;
pub mod error;
pub mod oauth;
pub mod types;

pub use client::{ClientConfig, WebmasterClient};
pub use diagnostics::{DiagnosticsSink, NoopSink, TracingSink};
pub use error::Error;
pub use types::{DeviceType, QueryIndicator, QueryOrderBy, VerificationType};
