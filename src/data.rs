//! Queries over pinned data.
//!
//! This module provides the DataClient for listing pinned content and
//! reading account usage totals.

use crate::client::Client;
use crate::error::Result;
use crate::types::{ListPinsQuery, PinListPage, PinnedDataTotal};

/// Client for pin listings and usage totals.
///
/// Access via `client.data()`.
pub struct DataClient {
    client: Client,
}

impl DataClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List pinned content matching the query filters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::{Client, types::{ListPinsQuery, PinStatus}};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-key", "secret-key");
    ///
    ///     let pins = client
    ///         .data()
    ///         .pin_list(Some(ListPinsQuery {
    ///             status: Some(PinStatus::Pinned),
    ///             metadata_name: Some("dogs-nfts".to_string()),
    ///             ..Default::default()
    ///         }))
    ///         .await?;
    ///
    ///     for pin in pins.rows {
    ///         println!("{} ({} bytes)", pin.ipfs_pin_hash, pin.size);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn pin_list(&self, query: Option<ListPinsQuery>) -> Result<PinListPage> {
        let params = query.map(|q| q.to_query()).unwrap_or_default();
        self.client.get("/data/pinList", &params).await
    }

    /// Aggregate count and size of everything pinned by this account.
    pub async fn total_pinned_size(&self) -> Result<PinnedDataTotal> {
        self.client.get("/data/userPinnedDataTotal", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_client_creation() {
        let client = Client::new("test_key", "test_secret");
        let _data = client.data();
        // Just verify it compiles and doesn't panic
    }
}
