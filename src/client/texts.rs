//! Original-text operations for duplicate-content attribution.

use serde_json::{json, Value};

use super::http::WebmasterClient;
use super::query::{Query, PAGE_LIMIT_MAX};
use crate::error::Error;

impl WebmasterClient {
    /// Lists the original texts registered for the host.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a page size above 100 before any
    /// request is issued; otherwise errors as the transport does.
    pub async fn get_original_texts(
        &self,
        host_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, Error> {
        let (offset, limit) = self.page(offset, limit, PAGE_LIMIT_MAX)?;
        let mut query = Query::new();
        query.push("offset", offset);
        query.push("limit", limit);
        self.get(&format!("/hosts/{host_id}/original-texts/"), &query)
            .await
    }

    /// Registers an original text for the host.
    ///
    /// The length bounds are not checked client-side; the service owns that
    /// rule and its answer is authoritative.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn add_original_text(&self, host_id: &str, content: &str) -> Result<Value, Error> {
        self.post(
            &format!("/hosts/{host_id}/original-texts/"),
            &Query::new(),
            &json!({ "content": content }),
        )
        .await
    }

    /// Removes a registered original text.
    ///
    /// `Ok(None)` is the bare `204 No Content` acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn delete_original_text(
        &self,
        host_id: &str,
        text_id: &str,
    ) -> Result<Option<Value>, Error> {
        let text_id: String = url::form_urlencoded::byte_serialize(text_id.as_bytes()).collect();
        self.delete(&format!("/hosts/{host_id}/original-texts/{text_id}/"))
            .await
    }
}
