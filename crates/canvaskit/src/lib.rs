//! # canvaskit
//!
//! Rust SDK for the Canvas content API:
//! - Projects, organizations and canvases over the main API
//! - Account sign-up and verification
//! - OAuth password grants and token revocation
//! - Typed JSON:API decoding with field-level errors
//!
//! Every call makes exactly one attempt through a pluggable
//! [`Transport`] and delivers its result on a [`CompletionQueue`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use canvaskit::{Client, OAuthClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let oauth = OAuthClient::new("client-id", "client-secret")?;
//!     let account = oauth.create_access_token("sam", "hunter2").await?;
//!
//!     let client = Client::new(account.access_token)?;
//!     for project in client.projects().list().await? {
//!         println!("{}", project.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding your own resources
//!
//! Any type implementing [`FromResource`] can be the target of
//! [`Single`] or [`Collection`]:
//!
//! ```rust,no_run
//! use canvaskit::{Client, Collection, DecodeError, FromResource, Method, ResourceData};
//!
//! struct Member {
//!     username: String,
//! }
//!
//! impl FromResource for Member {
//!     fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
//!         Ok(Member { username: data.attribute("username")? })
//!     }
//! }
//!
//! # async fn example(client: Client) -> canvaskit::Result<()> {
//! let request = client.request(Method::GET, "orgs/o1/members").build()?;
//! let members = client.dispatcher().send::<Collection<Member>>(request).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use aggregate::aggregate_errors;
pub use authorization::AuthorizationClient;
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use decode::{FromAttribute, FromResource, ResourceData};
pub use dispatch::{Collection, CompletionQueue, Created, Dispatcher, Empty, Shape, Single};
pub use document::{Document, IncludedTable, ResourceIdentifier, ResourceObject};
pub use error::{DecodeError, Error, Result};
pub use http::{Credentials, Method, RequestBuilder};
pub use json::{JsonDictionary, JsonValue};
pub use oauth::{AccessGrant, OAuthClient};
pub use types::*;

pub use canvaskit_transport::{HttpRequest, HttpResponse, Transport, TransportError};

// Module declarations
pub mod aggregate;
pub mod authorization;
pub mod client;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod http;
pub mod json;
pub mod oauth;
pub mod observability;
pub mod resources;
pub mod types;

mod session;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use canvaskit::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        AuthorizationClient, Client, ClientConfig, DecodeError, Error, FromResource,
        OAuthClient, ResourceData, Result,
        types::{Account, Canvas, Organization, Project, User},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request
pub const USER_AGENT: &str = concat!("canvaskit-rust/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod property_tests;
