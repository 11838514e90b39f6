//! Recrawl queue operations.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::http::WebmasterClient;
use super::query::{Query, PAGE_LIMIT_MAX};
use crate::error::Error;

impl WebmasterClient {
    /// Lists the recrawl tasks submitted for the host.
    ///
    /// Omitted bounds default to the window from one month ago until now.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window or a page size
    /// above 100 before any request is issued; otherwise errors as the
    /// transport does.
    pub async fn get_recrawl_queue(
        &self,
        host_id: &str,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (date_from, date_to) = self.window(date_from, date_to)?;
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        query.push("date_from", date_from);
        query.push("date_to", date_to);
        self.get(&format!("/hosts/{host_id}/recrawl/queue/"), &query)
            .await
    }

    /// Submits a page URL for recrawling.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one
    /// (the daily quota is enforced server-side).
    pub async fn add_recrawl_task(&self, host_id: &str, url: &str) -> Result<Value, Error> {
        self.post(
            &format!("/hosts/{host_id}/recrawl/queue/"),
            &Query::new(),
            &json!({ "url": url }),
        )
        .await
    }

    /// Reports the state of a single recrawl task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_recrawl_task(&self, host_id: &str, task_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/recrawl/queue/{task_id}"), &Query::new())
            .await
    }

    /// Reports the host's daily recrawl quota.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_recrawl_quota(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/recrawl/quota/"), &Query::new())
            .await
    }
}
