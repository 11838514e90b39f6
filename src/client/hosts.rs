//! Host management and verification operations.

use serde_json::{json, Value};

use super::http::WebmasterClient;
use super::query::Query;
use crate::error::Error;
use crate::types::VerificationType;

impl WebmasterClient {
    /// Lists every host registered for the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_hosts(&self) -> Result<Value, Error> {
        self.get("/hosts/", &Query::new()).await
    }

    /// Registers a new host.
    ///
    /// `host_url` should be the full address, preferably with the scheme.
    /// On success the payload carries the `host_id` assigned by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn add_host(&self, host_url: &str) -> Result<Value, Error> {
        self.post("/hosts/", &Query::new(), &json!({ "host_url": host_url }))
            .await
    }

    /// Removes a host from the user's account.
    ///
    /// `Ok(None)` is the bare `204 No Content` acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn delete_host(&self, host_id: &str) -> Result<Option<Value>, Error> {
        self.delete(&format!("/hosts/{host_id}/")).await
    }

    /// Fetches detailed information about a single host.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_host(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/"), &Query::new()).await
    }

    /// Fetches a host together with its key indexing indicators.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_host_summary(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/summary/"), &Query::new())
            .await
    }

    /// Lists the verified owners of a host.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_host_owners(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/owners/"), &Query::new())
            .await
    }

    /// Reports the verification status of a host, including the verifiers
    /// applicable to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn check_verification(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/verification/"), &Query::new())
            .await
    }

    /// Starts host verification with the given method.
    ///
    /// The service rejects the call for hosts that are already verified or
    /// mid-verification; poll [`WebmasterClient::check_verification`] for
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn verify_host(
        &self,
        host_id: &str,
        verification_type: VerificationType,
    ) -> Result<Value, Error> {
        let mut query = Query::new();
        query.push("verification_type", verification_type);
        self.post(&format!("/hosts/{host_id}/verification/"), &query, &json!({}))
            .await
    }

    /// Reports site problems found by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports one.
    pub async fn get_diagnostics(&self, host_id: &str) -> Result<Value, Error> {
        self.get(&format!("/hosts/{host_id}/diagnostics/"), &Query::new())
            .await
    }
}
