//! HTTP client for the Yandex.Webmaster REST API.
//!
//! The client resolves the caller's user id once at construction and scopes
//! every further resource under it. Each operation performs its parameter
//! validation locally, issues exactly one HTTP request, and returns the
//! endpoint's JSON payload or an [`Error`](crate::error::Error).
//!
//! # Example
//!
//! ```rust,ignore
//! use yandex_webmaster::client::{ClientConfig, WebmasterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebmasterClient::init("my-oauth-token").await?;
//!     println!("authorized as user {}", client.user_id());
//!
//!     let hosts = client.get_hosts().await?;
//!     println!("hosts: {hosts}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod http;

pub(crate) mod query;

mod hosts;
mod indexing;
mod links;
mod queries;
mod recrawl;
mod sitemaps;
mod texts;

pub use config::ClientConfig;
pub use http::WebmasterClient;
