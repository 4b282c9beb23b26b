//! Example listing every canvas the signed-in user can see
//!
//! # Prerequisites
//!
//! Set your access token:
//! ```bash
//! export CANVAS_ACCESS_TOKEN=...
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --example list_canvases
//! ```

use canvaskit::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::from_config(ClientConfig::from_env()?)?;

    for org in client.organizations().list().await? {
        println!("{} ({} members)", org.name, org.members_count);

        for canvas in client.canvases().list(Some(&org.id)).await? {
            let marker = if canvas.is_archived() { " [archived]" } else { "" };
            println!("  {}{} {}", canvas.title, marker, canvas.url());
        }
    }

    Ok(())
}
