//! Sitemap listing and management operations.

use serde_json::{json, Value};

use super::http::WebmasterClient;
use super::query::Query;
use crate::error::Error;

/// Default page size of the sitemap listing.
const SITEMAPS_PAGE_DEFAULT: u32 = 10;

impl WebmasterClient {
    /// Lists the sitemap files the robot uses when crawling the host.
    ///
    /// With `parent_id` set, lists the children of that sitemap index;
    /// otherwise the files at the root. `from_sitemap_id` starts the page
    /// after the given id (exclusive). Files added through the Webmaster UI
    /// or API but not yet picked up by the robot are not included; use
    /// [`WebmasterClient::get_user_sitemaps`] for those.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_sitemaps(
        &self,
        host_id: &str,
        parent_id: Option<&str>,
        limit: Option<u32>,
        from_sitemap_id: Option<&str>,
    ) -> Result<Value, Error> {
        let mut query = Query::new();
        query.push("limit", limit.unwrap_or(SITEMAPS_PAGE_DEFAULT));
        query.push_opt("parent_id", parent_id);
        query.push_opt("from", from_sitemap_id);
        self.get(&format!("/hosts/{host_id}/sitemaps/"), &query).await
    }

    /// Lists the sitemap files added through the Webmaster UI or API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_user_sitemaps(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/user-added-sitemaps/"), &Query::new())
            .await
    }

    /// Adds a sitemap file to the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn add_sitemap(&self, host_id: &str, url: &str) -> Result<Value, Error> {
        self.post(
            &format!("/hosts/{host_id}/user-added-sitemaps/"),
            &Query::new(),
            &json!({ "url": url }),
        )
        .await
    }

    /// Removes a user-added sitemap file.
    ///
    /// Only files added through the Webmaster UI or API can be removed this
    /// way; files referenced from robots.txt cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn delete_sitemap(
        &self,
        host_id: &str,
        sitemap_id: &str,
    ) -> Result<Option<Value>, Error> {
        self.delete(&format!("/hosts/{host_id}/user-added-sitemaps/{sitemap_id}/"))
            .await
    }
}
