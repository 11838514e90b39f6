//! Indexing and search-presence operations.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::http::WebmasterClient;
use super::query::{Query, PAGE_LIMIT_MAX};
use crate::error::Error;

impl WebmasterClient {
    /// History of the host's indexing counters.
    ///
    /// Omitted bounds default to the window from one month ago until now.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window before any request
    /// is issued; otherwise errors as the transport does.
    pub async fn get_indexing_history(
        &self,
        host_id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.window(date_from, date_to)?;
        let mut query = Query::new();
        query.push("date_from", date_from);
        query.push("date_to", date_to);
        self.get(&format!("/hosts/{host_id}/indexing/history/"), &query)
            .await
    }

    /// Sample pages known to the indexing robot, up to 50 000.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_indexing_samples(
        &self,
        host_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        self.get(&format!("/hosts/{host_id}/indexing/samples/"), &query)
            .await
    }

    /// History of the number of pages present in search results.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window before any request
    /// is issued; otherwise errors as the transport does.
    pub async fn get_search_url_history(
        &self,
        host_id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.window(date_from, date_to)?;
        let mut query = Query::new();
        query.push("date_from", date_from);
        query.push("date_to", date_to);
        self.get(
            &format!("/hosts/{host_id}/search-urls/in-search/history/"),
            &query,
        )
        .await
    }

    /// Sample pages currently present in search results, up to 50 000.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_search_url_samples(
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
            &format!("/hosts/{host_id}/search-urls/in-search/samples/"),
            &query,
        )
        .await
    }

    /// History of pages appearing in and dropping out of search results.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window before any request
    /// is issued; otherwise errors as the transport does.
    pub async fn get_search_event_history(
        &self,
        host_id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.window(date_from, date_to)?;
        let mut query = Query::new();
        query.push("date_from", date_from);
        query.push("date_to", date_to);
        self.get(
            &format!("/hosts/{host_id}/search-urls/events/history/"),
            &query,
        )
        .await
    }

    /// Sample pages that appeared in or dropped out of search results.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_search_event_samples(
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
            &format!("/hosts/{host_id}/search-urls/events/samples/"),
            &query,
        )
        .await
    }

    /// Monitored important pages of the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_important_urls(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/important-urls"), &Query::new())
            .await
    }

    /// Change history of a single monitored page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_important_url_history(
        &self,
        host_id: &str,
        url: &str,
    ) -> Result<Value, Error> {
        let mut query = Query::new();
        query.push("url", url);
        self.get(&format!("/hosts/{host_id}/important-urls/history/"), &query)
            .await
    }
}
