//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::diagnostics::{DiagnosticsSink, NoopSink};
use crate::error::Error;

/// Default base URL of the Webmaster API.
pub const DEFAULT_BASE_URL: &str = "https://api.webmaster.yandex.net/v4.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Sink receiving client-detected failures.
    pub diagnostics: Arc<dyn DiagnosticsSink>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("yandex-webmaster/{}", env!("CARGO_PKG_VERSION")),
            diagnostics: Arc::new(NoopSink),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the base URL is empty, cannot be
    /// parsed, or uses a scheme other than HTTP or HTTPS.
    pub fn validate(&self) -> Result<(), Error> {
        if self.base_url.is_empty() {
            return Err(Error::InvalidConfig("base_url cannot be empty".to_string()));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidConfig(format!("base_url is not a valid URL: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::InvalidConfig(
                "base_url must use the http or https scheme".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("yandex-webmaster/"));
    }

    #[test]
    fn test_config_new_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/v4.1/");
        assert_eq!(config.base_url, "https://api.example.com/v4.1");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("my-app/1.0");

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "my-app/1.0");
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::new("https://api.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_url() {
        let config = ClientConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("ftp://api.example.com");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_validate_unparseable_url() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig(_))
        ));
    }
}
