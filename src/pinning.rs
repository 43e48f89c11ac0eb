//! Pinning operations.
//!
//! This module provides the PinningClient for pinning files,
//! directories, JSON documents, and existing content hashes, plus
//! pin-queue inspection and pin removal.

use crate::client::Client;
use crate::error::{PinataError, Result};
use crate::files::{collect_files, destination_prefix, logical_destinations};
use crate::types::{
    PinHashOptions, PinJobsPage, PinJobsQuery, PinOptions, PinResponse, PinataMetadata,
    PinataOptions, QueuedPin,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Client for pinning operations.
///
/// Access via `client.pinning()`.
pub struct PinningClient {
    client: Client,
}

impl PinningClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Pin a local file or directory at the content root.
    ///
    /// Shorthand for [`pin_file_to`](Self::pin_file_to) with the root
    /// destination and full path preservation.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-key", "secret-key");
    ///
    ///     let receipt = client.pinning().pin_file("art/piece.png", None).await?;
    ///     println!("pinned as {}", receipt.ipfs_hash);
    ///     Ok(())
    /// }
    /// ```
    pub async fn pin_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<PinOptions>,
    ) -> Result<PinResponse> {
        self.pin_file_to(path, "/", true, options).await
    }

    /// Pin a local file or directory under a destination folder.
    ///
    /// A single file uploads as one part named after the destination
    /// joined with the file's base name. A directory uploads every
    /// regular file beneath it in one multipart request. With
    /// `preserve_full_paths` the hierarchy below the directory is kept
    /// as-is under `destination`; without it the directory's own name
    /// becomes the top path segment, so sibling subdirectories with
    /// same-named files stay distinct.
    ///
    /// The destination is normalized: spaces are stripped and a
    /// trailing `/` appended (`"retro-nfts/animals"` lands content
    /// under `retro-nfts/animals/`). `"/"` pins at the content root.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-key", "secret-key");
    ///
    ///     // ./gallery/a.png pins as animal-nfts/a.png
    ///     let receipt = client
    ///         .pinning()
    ///         .pin_file_to("./gallery", "animal-nfts/", true, None)
    ///         .await?;
    ///     println!("pinned as {}", receipt.ipfs_hash);
    ///     Ok(())
    /// }
    /// ```
    pub async fn pin_file_to(
        &self,
        path: impl AsRef<Path>,
        destination: &str,
        preserve_full_paths: bool,
        options: Option<PinOptions>,
    ) -> Result<PinResponse> {
        let path = path.as_ref();
        let mut form = Form::new();

        if path.is_dir() {
            let files = collect_files(path)?;
            for (local, logical) in
                logical_destinations(&files, path, destination, preserve_full_paths)
            {
                let content = fs::read(&local)?;
                form = form.part("file", Part::bytes(content).file_name(logical));
            }
        } else {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    PinataError::InvalidRequest(format!("not a pinnable path: {}", path.display()))
                })?;
            let content = fs::read(path)?;
            let logical = format!("{}{}", destination_prefix(destination), name);
            form = form.part("file", Part::bytes(content).file_name(logical));
        }

        if let Some(options) = options {
            form = apply_pin_fields(form, &options)?;
        }

        self.client.post_multipart("/pinning/pinFileToIPFS", form).await
    }

    /// Submit an existing content hash to the pin queue.
    ///
    /// Pinning happens asynchronously on the remote side; track
    /// progress via [`pin_jobs`](Self::pin_jobs). The queue endpoint is
    /// deprecated upstream in favor of [`pin_by_hash`](Self::pin_by_hash)
    /// and kept for compatibility with existing integrations.
    pub async fn pin_hash(
        &self,
        hash: &str,
        options: Option<PinHashOptions>,
    ) -> Result<QueuedPin> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "hashToPin")]
            hash_to_pin: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            host_nodes: Option<Vec<String>>,
            #[serde(rename = "pinataMetadata", skip_serializing_if = "Option::is_none")]
            pinata_metadata: Option<PinataMetadata>,
        }

        let options = options.unwrap_or_default();
        let request = Request {
            hash_to_pin: hash,
            host_nodes: options.host_nodes,
            pinata_metadata: options.metadata,
        };

        self.client.post("/pinning/addHashToPinQueue", &request).await
    }

    /// Pin content already on the network by hash, named `name` in the
    /// pin manager.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use pinata_sdk::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("api-key", "secret-key");
    ///
    ///     let job = client
    ///         .pinning()
    ///         .pin_by_hash("QmTzQ1JRkWErjk39mryYw2WVaphAZNAREyMchXzYQ7c15n", "backup")
    ///         .await?;
    ///     println!("queued: {}", job.status);
    ///     Ok(())
    /// }
    /// ```
    pub async fn pin_by_hash(&self, hash: &str, name: &str) -> Result<QueuedPin> {
        #[derive(Serialize)]
        struct Request<'a> {
            #[serde(rename = "hashToPin")]
            hash_to_pin: &'a str,
            #[serde(rename = "pinataMetadata")]
            pinata_metadata: Metadata<'a>,
        }

        #[derive(Serialize)]
        struct Metadata<'a> {
            name: &'a str,
        }

        let request = Request {
            hash_to_pin: hash,
            pinata_metadata: Metadata { name },
        };

        self.client.post("/pinning/pinByHash", &request).await
    }

    /// Pin a JSON-serializable document.
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
    ///     let receipt = client
    ///         .pinning()
    ///         .pin_json(&json!({"trait": "rare", "edition": 7}), None)
    ///         .await?;
    ///     println!("pinned as {}", receipt.ipfs_hash);
    ///     Ok(())
    /// }
    /// ```
    pub async fn pin_json<T: Serialize>(
        &self,
        document: &T,
        options: Option<PinOptions>,
    ) -> Result<PinResponse> {
        #[derive(Serialize)]
        struct Request<'a, T> {
            #[serde(rename = "pinataContent")]
            pinata_content: &'a T,
            #[serde(rename = "pinataMetadata", skip_serializing_if = "Option::is_none")]
            pinata_metadata: Option<&'a PinataMetadata>,
            #[serde(rename = "pinataOptions", skip_serializing_if = "Option::is_none")]
            pinata_options: Option<&'a PinataOptions>,
        }

        let options = options.unwrap_or_default();
        let request = Request {
            pinata_content: document,
            pinata_metadata: options.metadata.as_ref(),
            pinata_options: options.options.as_ref(),
        };

        self.client.post("/pinning/pinJSONToIPFS", &request).await
    }

    /// List jobs currently on the pin queue.
    pub async fn pin_jobs(&self, query: Option<PinJobsQuery>) -> Result<PinJobsPage> {
        let params = query.map(|q| q.to_query()).unwrap_or_default();
        self.client.get("/pinning/pinJobs", &params).await
    }

    /// Remove the pin for `hash`.
    ///
    /// Success is reported as unit regardless of the response body,
    /// which the service does not guarantee to be JSON.
    pub async fn unpin(&self, hash: &str) -> Result<()> {
        self.client.delete(&format!("/pinning/unpin/{hash}")).await
    }
}

/// Attach `pinataMetadata` / `pinataOptions` multipart fields when
/// present; absent options contribute no field at all.
fn apply_pin_fields(mut form: Form, options: &PinOptions) -> Result<Form> {
    if let Some(metadata) = &options.metadata {
        form = form.text("pinataMetadata", encode_field(metadata)?);
    }
    if let Some(pin_options) = &options.options {
        form = form.text("pinataOptions", encode_field(pin_options)?);
    }
    Ok(form)
}

fn encode_field<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| PinataError::InvalidRequest(e.to_string()))
}
