//! Basic usage example for the Pinata SDK.
//!
//! This example demonstrates:
//! - Creating a client
//! - Pinning a JSON document
//! - Listing pinned content
//! - Unpinning
//!
//! Run with:
//! ```bash
//! PINATA_API_KEY=xxx PINATA_SECRET_API_KEY=yyy cargo run --example basic
//! ```

use pinata_sdk::{Client, ListPinsQuery, PinStatus};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get credentials from environment
    let api_key = std::env::var("PINATA_API_KEY")
        .expect("PINATA_API_KEY environment variable required");
    let secret_api_key = std::env::var("PINATA_SECRET_API_KEY")
        .expect("PINATA_SECRET_API_KEY environment variable required");

    // Create client
    println!("Creating Pinata client...");
    let client = Client::new(&api_key, &secret_api_key);

    // Pin a JSON document
    println!("\nPinning a JSON document...");
    let receipt = client
        .pinning()
        .pin_json(&json!({"example": "pinata-sdk", "edition": 1}), None)
        .await?;

    println!("Pinned:");
    println!("  Hash:      {}", receipt.ipfs_hash);
    println!("  Size:      {} bytes", receipt.pin_size);
    println!("  Timestamp: {}", receipt.timestamp);

    // Account usage
    println!("\nFetching account totals...");
    let total = client.data().total_pinned_size().await?;
    println!(
        "Account holds {} pins, {} bytes",
        total.pin_count, total.pin_size_total
    );

    // List pinned content
    println!("\nListing pinned content...");
    let pins = client
        .data()
        .pin_list(Some(ListPinsQuery {
            status: Some(PinStatus::Pinned),
            page_limit: Some(10),
            ..Default::default()
        }))
        .await?;
    println!("Found {} pins:", pins.count);
    for pin in &pins.rows {
        println!("  - {} ({} bytes)", pin.ipfs_pin_hash, pin.size);
    }

    // Clean up - unpin the document we created
    println!("\nCleaning up - removing the example pin...");
    client.pinning().unpin(&receipt.ipfs_hash).await?;
    println!("Pin removed.");

    println!("\nDone!");
    Ok(())
}
