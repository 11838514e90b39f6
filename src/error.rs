//! Client error types.
//!
//! Every operation returns either the parsed API payload or one of these
//! errors; nothing panics and no failure escapes as a raw fault.

/// Errors produced by the Webmaster client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP exchange itself failed (connection, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The exchange completed but never produced a usable answer: an empty
    /// body, or a redirect (redirects are never followed).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was present but was not a JSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A caller-supplied parameter is outside the documented contract.
    #[error("validation failure: {0}")]
    Validation(String),

    /// The service answered with its own error object; `code` and `message`
    /// are forwarded verbatim, not re-wrapped.
    #[error("API error [{code}]: {message}")]
    Api {
        /// Error code reported by the service.
        code: String,
        /// Error message reported by the service.
        message: String,
    },

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the wire-level error code for this error.
    ///
    /// Upstream errors keep the code assigned by the service; every failure
    /// detected inside the client maps to `CRITICAL_ERROR`, matching the
    /// envelope the API itself emits.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Api { code, .. } => code,
            _ => "CRITICAL_ERROR",
        }
    }

    /// Returns true if the error was detected locally rather than reported
    /// by the service.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        !matches!(self, Self::Api { .. })
    }
}
