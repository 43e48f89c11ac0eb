//! Type definitions for the Pinata SDK.
//!
//! This module contains the option structs, response types, and list
//! query builders used by the SDK.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata attached to a pin (the `pinataMetadata` document).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinataMetadata {
    /// Display name in the pin manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form key/value annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyvalues: Option<HashMap<String, serde_json::Value>>,
}

/// Pinning behavior switches (the `pinataOptions` document).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinataOptions {
    /// CID version to pin under (0 or 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid_version: Option<u8>,
    /// Wrap uploaded content in a directory object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_with_directory: Option<bool>,
}

/// Options for file and JSON pinning.
///
/// Absent fields are omitted from the request entirely, never sent as
/// null.
#[derive(Debug, Clone, Default)]
pub struct PinOptions {
    pub metadata: Option<PinataMetadata>,
    pub options: Option<PinataOptions>,
}

/// Options for hash pinning through the pin queue.
#[derive(Debug, Clone, Default)]
pub struct PinHashOptions {
    /// Multiaddresses of nodes already hosting the content.
    pub host_nodes: Option<Vec<String>>,
    pub metadata: Option<PinataMetadata>,
}

/// Options for [`KeysClient::generate_api_key`](crate::keys::KeysClient::generate_api_key).
#[derive(Debug, Clone, Default)]
pub struct ApiKeyOptions {
    /// Endpoint permission document. Required for non-admin keys.
    pub permissions: Option<serde_json::Value>,
    /// Number of uses before the key expires.
    pub max_uses: Option<u64>,
}

/// Receipt for content pinned via file or JSON upload.
#[derive(Debug, Clone, Deserialize)]
pub struct PinResponse {
    /// Content hash the upload was pinned under.
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    /// Pinned size in bytes.
    #[serde(rename = "PinSize")]
    pub pin_size: u64,
    /// Server-side pin timestamp.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    /// Set when the content was already pinned by this account.
    #[serde(rename = "isDuplicate", default)]
    pub is_duplicate: Option<bool>,
}

/// Entry created on the pin queue for a hash-based pin request.
#[derive(Debug, Clone, Deserialize)]
pub struct QueuedPin {
    pub id: String,
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: String,
    /// Queue state, e.g. `prechecking` or `searching`.
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of pin queue jobs.
#[derive(Debug, Clone, Deserialize)]
pub struct PinJobsPage {
    pub count: u64,
    pub rows: Vec<PinJob>,
}

/// A job on the pin queue.
#[derive(Debug, Clone, Deserialize)]
pub struct PinJob {
    pub id: String,
    pub ipfs_pin_hash: String,
    pub date_queued: String,
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of pinned content.
#[derive(Debug, Clone, Deserialize)]
pub struct PinListPage {
    pub count: u64,
    pub rows: Vec<PinnedEntry>,
}

/// A pinned (or formerly pinned) piece of content.
#[derive(Debug, Clone, Deserialize)]
pub struct PinnedEntry {
    pub id: String,
    pub ipfs_pin_hash: String,
    pub size: u64,
    pub user_id: String,
    #[serde(default)]
    pub date_pinned: Option<String>,
    /// Set once the content has been unpinned.
    #[serde(default)]
    pub date_unpinned: Option<String>,
    #[serde(default)]
    pub metadata: Option<PinataMetadata>,
}

/// Aggregate pinned-data usage for the account.
#[derive(Debug, Clone, Deserialize)]
pub struct PinnedDataTotal {
    pub pin_count: u64,
    pub pin_size_total: u64,
    pub pin_size_with_replications_total: u64,
}

/// Credentials returned for a freshly generated API key.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedApiKey {
    #[serde(rename = "JWT", default)]
    pub jwt: Option<String>,
    pub pinata_api_key: String,
    pub pinata_api_secret: String,
}

/// Pin lifecycle states accepted by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinStatus {
    All,
    Pinned,
    Unpinned,
}

impl PinStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            PinStatus::All => "all",
            PinStatus::Pinned => "pinned",
            PinStatus::Unpinned => "unpinned",
        }
    }
}

/// Sort order for pin queue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsSort {
    Ascending,
    Descending,
}

impl JobsSort {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            JobsSort::Ascending => "ASC",
            JobsSort::Descending => "DESC",
        }
    }
}

/// Filters for [`DataClient::pin_list`](crate::data::DataClient::pin_list).
///
/// Every field is optional; unset fields contribute no query parameter.
#[derive(Debug, Clone, Default)]
pub struct ListPinsQuery {
    /// Only hashes containing this substring.
    pub hash_contains: Option<String>,
    pub status: Option<PinStatus>,
    /// ISO timestamp bounds on when the pin was created.
    pub pin_start: Option<String>,
    pub pin_end: Option<String>,
    /// ISO timestamp bounds on when the pin was removed.
    pub unpin_start: Option<String>,
    pub unpin_end: Option<String>,
    pub pin_size_min: Option<u64>,
    pub pin_size_max: Option<u64>,
    /// Filter on the metadata display name.
    pub metadata_name: Option<String>,
    /// Filter on metadata keyvalues, as the service's JSON filter
    /// document.
    pub metadata_keyvalues: Option<serde_json::Value>,
    pub page_limit: Option<u32>,
    pub page_offset: Option<u32>,
}

impl ListPinsQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(hash) = &self.hash_contains {
            params.push(("hashContains".to_string(), hash.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(start) = &self.pin_start {
            params.push(("pinStart".to_string(), start.clone()));
        }
        if let Some(end) = &self.pin_end {
            params.push(("pinEnd".to_string(), end.clone()));
        }
        if let Some(start) = &self.unpin_start {
            params.push(("unpinStart".to_string(), start.clone()));
        }
        if let Some(end) = &self.unpin_end {
            params.push(("unpinEnd".to_string(), end.clone()));
        }
        if let Some(min) = self.pin_size_min {
            params.push(("pinSizeMin".to_string(), min.to_string()));
        }
        if let Some(max) = self.pin_size_max {
            params.push(("pinSizeMax".to_string(), max.to_string()));
        }
        if let Some(name) = &self.metadata_name {
            params.push(("metadata[name]".to_string(), name.clone()));
        }
        if let Some(keyvalues) = &self.metadata_keyvalues {
            params.push(("metadata[keyvalues]".to_string(), keyvalues.to_string()));
        }
        if let Some(limit) = self.page_limit {
            params.push(("pageLimit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.page_offset {
            params.push(("pageOffset".to_string(), offset.to_string()));
        }

        params
    }
}

/// Filters for [`PinningClient::pin_jobs`](crate::pinning::PinningClient::pin_jobs).
#[derive(Debug, Clone, Default)]
pub struct PinJobsQuery {
    pub sort: Option<JobsSort>,
    /// Queue state to filter on, e.g. `prechecking`.
    pub status: Option<String>,
    pub ipfs_pin_hash: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PinJobsQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.as_str().to_string()));
        }
        if let Some(status) = &self.status {
            params.push(("status".to_string(), status.clone()));
        }
        if let Some(hash) = &self.ipfs_pin_hash {
            params.push(("ipfs_pin_hash".to_string(), hash.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serialization_skips_absent_fields() {
        let metadata = PinataMetadata {
            name: Some("dogs-nfts".to_string()),
            keyvalues: None,
        };

        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("dogs-nfts"));
        assert!(!json.contains("keyvalues"));
    }

    #[test]
    fn test_options_serialization_uses_camel_case() {
        let options = PinataOptions {
            cid_version: Some(1),
            wrap_with_directory: None,
        };

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"cidVersion":1}"#);
    }

    #[test]
    fn test_pin_response_deserialization() {
        let json = r#"{
            "IpfsHash": "QmTzQ1JRkWErjk39mryYw2WVaphAZNAREyMchXzYQ7c15n",
            "PinSize": 1234,
            "Timestamp": "2024-05-17T00:00:00.000Z"
        }"#;

        let receipt: PinResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            receipt.ipfs_hash,
            "QmTzQ1JRkWErjk39mryYw2WVaphAZNAREyMchXzYQ7c15n"
        );
        assert_eq!(receipt.pin_size, 1234);
        assert!(receipt.is_duplicate.is_none());
    }

    #[test]
    fn test_pin_list_query_building() {
        let query = ListPinsQuery {
            status: Some(PinStatus::Pinned),
            metadata_name: Some("dogs-nfts".to_string()),
            page_limit: Some(10),
            ..Default::default()
        };

        let params = query.to_query();
        assert_eq!(
            params,
            vec![
                ("status".to_string(), "pinned".to_string()),
                ("metadata[name]".to_string(), "dogs-nfts".to_string()),
                ("pageLimit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_builds_no_params() {
        assert!(ListPinsQuery::default().to_query().is_empty());
        assert!(PinJobsQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_jobs_query_sort_values() {
        let query = PinJobsQuery {
            sort: Some(JobsSort::Descending),
            limit: Some(5),
            ..Default::default()
        };

        let params = query.to_query();
        assert_eq!(params[0], ("sort".to_string(), "DESC".to_string()));
        assert_eq!(params[1], ("limit".to_string(), "5".to_string()));
    }
}
