//! # Pinata Rust SDK
//!
//! Rust SDK for the [Pinata](https://pinata.cloud) pinning API.
//!
//! Pinata pins content to the IPFS network and keeps it retrievable
//! until you unpin it. This crate covers the pinning endpoints (files,
//! directories, JSON documents, existing content hashes), pin listings
//! and usage totals, and API key management.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pinata_sdk::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with your key pair
//!     let client = Client::new("api-key", "secret-key");
//!
//!     // Pin a JSON document
//!     let receipt = client
//!         .pinning()
//!         .pin_json(&json!({"name": "piece #7", "rarity": "legendary"}), None)
//!         .await?;
//!     println!("pinned as {}", receipt.ipfs_hash);
//!
//!     // Pin a whole directory under a destination folder
//!     let receipt = client
//!         .pinning()
//!         .pin_file_to("./gallery", "animal-nfts/", true, None)
//!         .await?;
//!     println!("directory pinned as {}", receipt.ipfs_hash);
//!
//!     // Remove a pin
//!     client.pinning().unpin(&receipt.ipfs_hash).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pinning**: files, directories (one multipart request), JSON
//!   documents, and existing hashes via the pin queue
//! - **Destination paths**: place uploads under a chosen folder, with
//!   or without their full relative paths
//! - **Data queries**: filtered pin listings and account usage totals
//! - **API keys**: generate scoped or admin keys, revoke keys
//!
//! ## Error Handling
//!
//! All operations return `Result<T, PinataError>`. Transport failures,
//! remote error documents, and local misuse stay distinct:
//!
//! ```rust,no_run
//! use pinata_sdk::{Client, PinataError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("api-key", "secret-key");
//!
//!     match client.data().total_pinned_size().await {
//!         Ok(total) => println!("{} pins", total.pin_count),
//!         Err(PinataError::Api { status, reason, text }) => {
//!             println!("service said {status} {reason}: {text}")
//!         }
//!         Err(PinataError::Http(e)) => println!("could not reach the service: {e}"),
//!         Err(e) => println!("error: {e}"),
//!     }
//! }
//! ```

pub mod client;
pub mod data;
pub mod error;
pub mod files;
pub mod keys;
pub mod pinning;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig};
pub use error::{PinataError, Result};
pub use files::normalize_destination;

// Re-export types module for easy access
pub use types::{
    ApiKeyOptions, GeneratedApiKey, JobsSort, ListPinsQuery, PinHashOptions, PinJob, PinJobsPage,
    PinJobsQuery, PinListPage, PinOptions, PinResponse, PinStatus, PinataMetadata, PinataOptions,
    PinnedDataTotal, PinnedEntry, QueuedPin,
};
