//! Diagnostics sink for client-detected failures.
//!
//! The client mirrors every locally detected error to an injectable sink so
//! embedding applications can observe failures without handling each result.
//! The default sink discards everything; [`TracingSink`] forwards to the
//! `tracing` error and warning levels. Upstream API errors are returned to
//! the caller verbatim and never reach the sink.

/// Receiver for diagnostics emitted by the client.
pub trait DiagnosticsSink: Send + Sync {
    /// Called for every failure that aborts an operation.
    fn critical(&self, message: &str);

    /// Called for recoverable conditions that do not abort an operation.
    fn warning(&self, message: &str);
}

/// Sink that discards all diagnostics. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn critical(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}

/// Sink that forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn critical(&self, message: &str) {
        tracing::error!(target: "yandex_webmaster", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "yandex_webmaster", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_accepts_messages() {
        let sink = NoopSink;
        sink.critical("ignored");
        sink.warning("ignored");
    }

    #[test]
    fn test_sink_is_object_safe() {
        let sink: Box<dyn DiagnosticsSink> = Box::new(NoopSink);
        sink.critical("ignored");
    }
}
