//! Example exchanging a username and password for an access token
//!
//! # Prerequisites
//!
//! Set your OAuth client credentials:
//! ```bash
//! export CANVAS_CLIENT_ID=...
//! export CANVAS_CLIENT_SECRET=...
//! ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --example sign_in -- <username> <password>
//! ```

use canvaskit::{Client, ClientConfig, OAuthClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(username), Some(password)) = (args.next(), args.next()) else {
        eprintln!("usage: sign_in <username> <password>");
        std::process::exit(2);
    };

    let oauth = OAuthClient::from_config(ClientConfig::from_env()?)?;
    let account = match oauth.create_access_token(&username, &password).await {
        Ok(account) => account,
        Err(e) => {
            eprintln!("Sign in failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Signed in as {}", account.email);

    let client = Client::new(account.access_token.clone())?;
    let projects = client.projects().list().await?;
    println!("{} projects", projects.len());

    oauth.revoke_access_token(&account.access_token).await?;
    println!("Token revoked");

    Ok(())
}
