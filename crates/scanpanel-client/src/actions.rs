use crate::ScannerClient;
use crate::error::FetchError;
use crate::http::{decode, require_success, send};
use crate::wire::{AssetPage, DeleteOutcome, PingReport, ReverifyOutcome, SyncOutcome};
use serde_json::{Value, json};
use tracing::info;

/// One-shot operations against the scanner, each a single request with
/// no retry. Non-2xx becomes a `FetchError`; a probe reporting bad
/// connectivity or auth on a 2xx is a normal result.
impl ScannerClient {
    pub fn ping(&self) -> Result<PingReport, FetchError> {
        let response = send(self.client.get(self.endpoint("ping")))?;
        let response = require_success(response)?;
        decode(response)
    }

    pub fn fetch_assets(&self, limit: u32, key_type: &str) -> Result<AssetPage, FetchError> {
        info!(limit, key_type, "fetching key assets");
        let request = self
            .client
            .get(self.endpoint("key-assets"))
            .query(&[("limit", limit.to_string()), ("key_type", key_type.to_string())]);
        let response = require_success(send(request)?)?;
        decode(response)
    }

    /// Remove invalid keys on the remote side. The local cache is not
    /// refreshed; the caller re-fetches to observe the new state.
    pub fn delete_invalid(&self, limit: u32) -> Result<DeleteOutcome, FetchError> {
        info!(limit, "deleting invalid keys");
        let request = self
            .client
            .post(self.endpoint("delete-invalid"))
            .query(&[("limit", limit.to_string())]);
        let response = require_success(send(request)?)?;
        decode(response)
    }

    pub fn trigger_reverify(
        &self,
        count: u32,
        statuses: &[String],
    ) -> Result<ReverifyOutcome, FetchError> {
        info!(count, filtered = !statuses.is_empty(), "triggering reverify");
        let request = self
            .client
            .post(self.endpoint("reverify"))
            .json(&reverify_payload(count, statuses));
        let response = require_success(send(request)?)?;
        decode(response)
    }

    pub fn trigger_sync(&self, limit: u32, key_type: &str) -> Result<SyncOutcome, FetchError> {
        info!(limit, key_type, "triggering sync");
        let request = self
            .client
            .post(self.endpoint("sync-now"))
            .query(&[("limit", limit.to_string()), ("key_type", key_type.to_string())]);
        let response = require_success(send(request)?)?;
        decode(response)
    }

    /// Same wire contract as `delete_invalid`; the schedule page's
    /// run-now control.
    pub fn trigger_delete(&self, limit: u32) -> Result<DeleteOutcome, FetchError> {
        self.delete_invalid(limit)
    }
}

/// An empty filter is omitted from the payload entirely; the server
/// reads omission as "all statuses".
pub fn reverify_payload(count: u32, statuses: &[String]) -> Value {
    let mut payload = json!({ "count": count });
    if !statuses.is_empty() {
        payload["statuses"] = json!(statuses);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverify_payload_omits_empty_filter() {
        let payload = reverify_payload(10, &[]);
        assert_eq!(payload["count"], json!(10));
        assert!(payload.get("statuses").is_none());
    }

    #[test]
    fn reverify_payload_includes_filter() {
        let statuses = vec!["valid".to_string()];
        let payload = reverify_payload(10, &statuses);
        assert_eq!(payload["statuses"], json!(["valid"]));
    }

    #[test]
    fn reverify_payload_keeps_multiple_statuses() {
        let statuses = vec!["pending".to_string(), "rate_limited".to_string()];
        let payload = reverify_payload(5, &statuses);
        assert_eq!(payload["statuses"], json!(["pending", "rate_limited"]));
        assert_eq!(payload["count"], json!(5));
    }
}
