use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::RotateError;

/// A droplet snapshot as returned by the `/v2/snapshots` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub id: String,
    pub resource_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Thin DigitalOcean API client; one reqwest client reused for every call.
#[derive(Debug, Clone)]
pub struct DoClient {
    http: Client,
    base_url: String,
    token: String,
}

impl DoClient {
    pub fn new(config: &AppConfig) -> Result<Self, RotateError> {
        let http = Client::builder()
            .user_agent(concat!("dosnap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Fetch the account's droplet snapshots. Single page only.
    pub async fn list_droplet_snapshots(&self) -> Result<Vec<Snapshot>, RotateError> {
        let url = format!("{}/v2/snapshots", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("resource_type", "droplet"), ("per_page", "200")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RotateError::message(format!(
                "snapshot listing failed: DigitalOcean responded with {}",
                response.status()
            )));
        }

        let payload: SnapshotListResponse = response.json().await?;
        let snapshots: Vec<Snapshot> = payload.snapshots.into_iter().map(Snapshot::from).collect();
        debug!(count = snapshots.len(), "fetched droplet snapshots");
        Ok(snapshots)
    }

    pub async fn delete_snapshot(&self, snapshot_id: &str) -> Result<(), RotateError> {
        let url = format!("{}/v2/snapshots/{}", self.base_url, snapshot_id);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RotateError::message(format!(
                "delete of snapshot {} failed: DigitalOcean responded with {}",
                snapshot_id,
                response.status()
            )));
        }

        debug!(snapshot_id, "deleted snapshot");
        Ok(())
    }

    /// Issue a snapshot action for the droplet. Completion is not polled.
    pub async fn snapshot_droplet(&self, droplet_id: u64, name: &str) -> Result<(), RotateError> {
        let url = format!("{}/v2/droplets/{}/actions", self.base_url, droplet_id);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "type": "snapshot", "name": name }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RotateError::message(format!(
                "snapshot of droplet {} failed: DigitalOcean responded with {}",
                droplet_id,
                response.status()
            )));
        }

        debug!(droplet_id, name, "requested droplet snapshot");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotListResponse {
    #[serde(default)]
    snapshots: Vec<SnapshotPayload>,
}

#[derive(Debug, Deserialize)]
struct SnapshotPayload {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    resource_id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<SnapshotPayload> for Snapshot {
    fn from(payload: SnapshotPayload) -> Self {
        let SnapshotPayload {
            id,
            name,
            resource_id,
            created_at,
        } = payload;

        // Malformed or absent timestamps sort as the epoch, i.e. oldest.
        let created_at = created_at
            .and_then(|raw| raw.parse::<DateTime<Utc>>().ok())
            .unwrap_or(DateTime::UNIX_EPOCH);

        Self {
            id,
            resource_id: resource_id.unwrap_or_default(),
            name: name.unwrap_or_default(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_full_fields_converts() {
        let payload: SnapshotPayload = serde_json::from_value(json!({
            "id": "6372321",
            "name": "Automatic Snapshot",
            "resource_id": "12345",
            "created_at": "2025-11-04T22:23:02Z",
        }))
        .unwrap();

        let snapshot = Snapshot::from(payload);
        assert_eq!(snapshot.id, "6372321");
        assert_eq!(snapshot.resource_id, "12345");
        assert_eq!(snapshot.name, "Automatic Snapshot");
        assert_eq!(
            snapshot.created_at,
            "2025-11-04T22:23:02Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn garbage_timestamp_falls_back_to_epoch() {
        let payload: SnapshotPayload = serde_json::from_value(json!({
            "id": "6372322",
            "name": "Automatic Snapshot",
            "resource_id": "12345",
            "created_at": "not-a-timestamp",
        }))
        .unwrap();

        assert_eq!(Snapshot::from(payload).created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn missing_optional_fields_default() {
        let payload: SnapshotPayload = serde_json::from_value(json!({ "id": "6372323" })).unwrap();

        let snapshot = Snapshot::from(payload);
        assert_eq!(snapshot.resource_id, "");
        assert_eq!(snapshot.name, "");
        assert_eq!(snapshot.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn listing_without_snapshots_key_is_empty() {
        let payload: SnapshotListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(payload.snapshots.is_empty());
    }
}
