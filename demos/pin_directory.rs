//! Directory pinning example for the Pinata SDK.
//!
//! Pins a local directory as one multipart upload and shows how the
//! destination folder and path preservation affect the pinned tree.
//!
//! Run with:
//! ```bash
//! PINATA_API_KEY=xxx PINATA_SECRET_API_KEY=yyy \
//!     cargo run --example pin_directory -- ./my-directory
//! ```

use pinata_sdk::{Client, normalize_destination};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("PINATA_API_KEY")
        .expect("PINATA_API_KEY environment variable required");
    let secret_api_key = std::env::var("PINATA_SECRET_API_KEY")
        .expect("PINATA_SECRET_API_KEY environment variable required");

    let directory = std::env::args()
        .nth(1)
        .expect("usage: pin_directory <path-to-directory>");

    let client = Client::new(&api_key, &secret_api_key);

    let destination = "demo uploads/archive";
    println!(
        "Pinning {} under {}...",
        directory,
        normalize_destination(destination)
    );

    // preserve_full_paths = false keeps the directory's own name as the
    // top folder of the pinned tree.
    let receipt = client
        .pinning()
        .pin_file_to(&directory, destination, false, None)
        .await?;

    println!("Pinned:");
    println!("  Hash:      {}", receipt.ipfs_hash);
    println!("  Size:      {} bytes", receipt.pin_size);
    if receipt.is_duplicate.unwrap_or(false) {
        println!("  (content was already pinned)");
    }

    Ok(())
}
