//! API key management.
//!
//! This module provides the KeysClient for generating and revoking
//! scoped Pinata API keys.

use crate::client::Client;
use crate::error::{PinataError, Result};
use crate::types::{ApiKeyOptions, GeneratedApiKey};
use serde::Serialize;
use serde_json::json;

/// Client for API key management.
///
/// Access via `client.keys()`.
pub struct KeysClient {
    client: Client,
}

impl KeysClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Generate a new API key named `name`.
    ///
    /// Admin keys carry the full permission set. Non-admin keys must
    /// spell out their endpoint permissions in
    /// [`ApiKeyOptions::permissions`]; omitting them fails locally
    /// before any request is sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::{Client, types::ApiKeyOptions};
    /// use serde_json::json;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-key", "secret-key");
    ///
    ///     let key = client
    ///         .keys()
    ///         .generate_api_key(
    ///             "uploader",
    ///             false,
    ///             Some(ApiKeyOptions {
    ///                 permissions: Some(json!({
    ///                     "endpoints": {"pinning": {"pinFileToIPFS": true}}
    ///                 })),
    ///                 max_uses: Some(100),
    ///             }),
    ///         )
    ///         .await?;
    ///     println!("new key: {}", key.pinata_api_key);
    ///     Ok(())
    /// }
    /// ```
    pub async fn generate_api_key(
        &self,
        name: &str,
        is_admin: bool,
        options: Option<ApiKeyOptions>,
    ) -> Result<GeneratedApiKey> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "keyName")]
            key_name: &'a str,
            permissions: serde_json::Value,
            #[serde(rename = "maxUses", skip_serializing_if = "Option::is_none")]
            max_uses: Option<u64>,
        }

        let options = options.unwrap_or_default();
        let permissions = if is_admin {
            json!({"admin": true})
        } else {
            options.permissions.ok_or_else(|| {
                PinataError::InvalidRequest(
                    "non-admin keys require explicit permissions".to_string(),
                )
            })?
        };

        let request = Request {
            key_name: name,
            permissions,
            max_uses: options.max_uses,
        };

        self.client.post("/users/generateApiKey", &request).await
    }

    /// Revoke an API key.
    ///
    /// The service reports success whether or not the key existed, so a
    /// successful return confirms the key is gone, not that it was
    /// there.
    pub async fn revoke_api_key(&self, key: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "apiKey")]
            api_key: &'a str,
        }

        self.client
            .put("/users/revokeApiKey", &Request { api_key: key })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_client_creation() {
        let client = Client::new("test_key", "test_secret");
        let _keys = client.keys();
        // Just verify it compiles and doesn't panic
    }
}
