//! Transport layer for canvaskit
//!
//! The SDK turns every call into a fully-formed [`HttpRequest`] and hands
//! it to a [`Transport`]. The transport answers once, with the server's
//! [`HttpResponse`] whatever its status, or with the [`TransportError`] that
//! kept a response from existing. [`HttpTransport`] is the reqwest-backed
//! default.
//!
//! # Usage
//!
//! ```no_run
//! use canvaskit_transport::{HttpRequest, HttpTransport, Transport};
//! use http::Method;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new(Method::GET, "https://api.usecanvas.com/v1/projects".parse()?);
//! let response = transport.send_http(request).await?;
//! println!("{}", response.status);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod traits;

pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
