//! Pinata API client.
//!
//! The main entry point for interacting with the Pinata pinning API.

use crate::data::DataClient;
use crate::error::{PinataError, Result};
use crate::keys::KeysClient;
use crate::pinning::PinningClient;
use reqwest::multipart::Form;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.pinata.cloud";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "pinata_api_key";
/// Header carrying the secret key on every request.
const SECRET_KEY_HEADER: &str = "pinata_secret_api_key";

/// Pinata API client.
///
/// # Example
///
/// ```rust,no_run
/// use pinata_sdk::Client;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("api-key", "secret-key");
///
///     // Pin a JSON document
///     let receipt = client
///         .pinning()
///         .pin_json(&json!({"hello": "world"}), None)
///         .await?;
///     println!("pinned as {}", receipt.ipfs_hash);
///
///     // Inspect account usage
///     let total = client.data().total_pinned_size().await?;
///     println!("{} pins, {} bytes", total.pin_count, total.pin_size_total);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) secret_api_key: String,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://api.pinata.cloud).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a new Pinata client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your Pinata API key
    /// * `secret_api_key` - The matching secret key
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::Client;
    ///
    /// let client = Client::new("api-key", "secret-key");
    /// ```
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, secret_api_key, ClientConfig::default())
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new Pinata client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("api-key", "secret-key", ClientConfig {
    ///     timeout: Some(Duration::from_secs(120)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("pinata-sdk-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    /// Get the pinning client for pin and unpin operations.
    pub fn pinning(&self) -> PinningClient {
        PinningClient::new(self.clone())
    }

    /// Get the data client for pin listings and usage totals.
    pub fn data(&self) -> DataClient {
        DataClient::new(self.clone())
    }

    /// Get the keys client for API key management.
    pub fn keys(&self) -> KeysClient {
        KeysClient::new(self.clone())
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = query.len(), "GET");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(SECRET_KEY_HEADER, &self.secret_api_key)
            .query(query)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(SECRET_KEY_HEADER, &self.secret_api_key)
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Make an authenticated multipart POST request.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST multipart");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(SECRET_KEY_HEADER, &self.secret_api_key)
            .multipart(form)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Make an authenticated PUT request with a JSON body.
    ///
    /// Success is reported as unit; the response body is not read
    /// because the service does not guarantee JSON here.
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "PUT");

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(SECRET_KEY_HEADER, &self.secret_api_key)
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Make an authenticated DELETE request.
    ///
    /// Success is reported as unit; the response body is not read
    /// because the service does not guarantee JSON here.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "DELETE");

        let response = self
            .http
            .delete(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(SECRET_KEY_HEADER, &self.secret_api_key)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Normalize a response: parsed JSON on 2xx, error record otherwise.
    ///
    /// A 2xx body that fails to parse is a protocol violation and
    /// surfaces as [`PinataError::MalformedBody`], never as an empty
    /// success.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| PinataError::MalformedBody(e.to_string()))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Build the error record for a non-2xx response.
    ///
    /// Error bodies are carried as raw text, never parsed as JSON.
    async fn error_from(response: reqwest::Response) -> PinataError {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "API error response");

        PinataError::Api {
            status: status.as_u16(),
            reason,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("test_key", "test_secret");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_config() {
        let client = Client::with_config(
            "test_key",
            "test_secret",
            ClientConfig {
                base_url: Some("https://custom.api.com".to_string()),
                timeout: Some(Duration::from_secs(60)),
                user_agent: None,
            },
        );
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.is_none());
    }
}
