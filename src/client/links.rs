//! External and internal link operations.

use serde_json::Value;

use super::http::WebmasterClient;
use super::query::{Query, PAGE_LIMIT_MAX};
use crate::error::Error;

/// Default indicator of the external-links history.
const EXTERNAL_LINKS_INDICATOR: &str = "LINKS_TOTAL_COUNT";

impl WebmasterClient {
    /// History of the number of external links pointing at the host.
    ///
    /// `indicator` defaults to `LINKS_TOTAL_COUNT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_external_links_history(
        &self,
        host_id: &str,
        indicator: Option<&str>,
    ) -> Result<Value, Error> {
        let mut query = Query::new();
        query.push("indicator", indicator.unwrap_or(EXTERNAL_LINKS_INDICATOR));
        self.get(&format!("/hosts/{host_id}/links/external/history/"), &query)
            .await
    }

    /// Sample external links pointing at pages of the host.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_external_link_samples(
        &self,
        host_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        self.get(&format!("/hosts/{host_id}/links/external/samples/"), &query)
            .await
    }

    /// Sample broken internal links of the host.
    ///
    /// `indicators` filters by breakage class and is encoded as repeated
    /// query keys; the service owns the set of accepted values.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_broken_link_samples(
        &self,
        host_id: &str,
        indicators: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        query.push_all("indicator", indicators);
        self.get(
            &format!("/hosts/{host_id}/links/internal/broken/samples"),
            &query,
        )
        .await
    }

    /// History of the number of broken internal links of the host.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_broken_links_history(
        &self,
        host_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        self.get(
            &format!("/hosts/{host_id}/links/internal/broken/history/"),
            &query,
        )
        .await
    }
}
