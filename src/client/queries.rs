//! Search-query statistics and site-quality operations.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::http::WebmasterClient;
use super::query::{Query, POPULAR_QUERIES_LIMIT_MAX};
use crate::error::Error;
use crate::types::{DeviceType, QueryIndicator, QueryOrderBy};

impl WebmasterClient {
    /// The host's most popular search queries, up to the top 500.
    ///
    /// Both indicator lists are encoded as repeated query keys, one per
    /// element. Omitted date bounds are left out of the request and the
    /// service reports the last week.
    ///
    /// # Arguments
    ///
    /// * `order_by` - Ordering of the listing
    /// * `query_indicators` - Metrics to include for each query
    /// * `device_types` - Device classes to filter by
    /// * `offset` / `limit` - Page window; the page size is capped at 500
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 500 or an inverted
    /// date window before any request is issued; otherwise errors as the
    /// transport does.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_popular_queries(
        &self,
        host_id: &str,
        order_by: QueryOrderBy,
        query_indicators: &[QueryIndicator],
        device_types: &[DeviceType],
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, POPULAR_QUERIES_LIMIT_MAX)?;
        let (date_from, date_to) = self.optional_window(date_from, date_to)?;
        let mut query = Query::new();
        query.push("order_by", order_by);
        query.push_all("query_indicator", query_indicators);
        query.push_all("device_type_indicator", device_types);
        query.push_opt("date_from", date_from);
        query.push_opt("date_to", date_to);
        query.push("offset", offset);
        query.push("limit", limit);
        self.get(&format!("/hosts/{host_id}/search-queries/popular/"), &query)
            .await
    }

    /// Aggregate statistics over all search queries of the host.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted date window before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_all_queries_history(
        &self,
        host_id: &str,
        query_indicators: &[QueryIndicator],
        device_types: &[DeviceType],
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.optional_window(date_from, date_to)?;
        let mut query = Query::new();
        query.push_all("query_indicator", query_indicators);
        query.push_all("device_type_indicator", device_types);
        query.push_opt("date_from", date_from);
        query.push_opt("date_to", date_to);
        self.get(
            &format!("/hosts/{host_id}/search-queries/all/history/"),
            &query,
        )
        .await
    }

    /// Statistics for a single search query.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted date window before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_query_history(
        &self,
        host_id: &str,
        query_id: &str,
        query_indicators: &[QueryIndicator],
        device_types: &[DeviceType],
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.optional_window(date_from, date_to)?;
        let mut query = Query::new();
        query.push_all("query_indicator", query_indicators);
        query.push_all("device_type_indicator", device_types);
        query.push_opt("date_from", date_from);
        query.push_opt("date_to", date_to);
        self.get(
            &format!("/hosts/{host_id}/search-queries/{query_id}/"),
            &query,
        )
        .await
    }

    /// History of the host's site quality index.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window before any request
    /// is issued; otherwise errors as the transport does.
    pub async fn get_sqi_history(
        &self,
        host_id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.window(date_from, date_to)?;
        let mut query = Query::new();
        query.push("date_from", date_from);
        query.push("date_to", date_to);
        self.get(&format!("/hosts/{host_id}/sqi-history/"), &query)
            .await
    }
}
