//! HTTP request construction
//!
//! Requests are described with a [`RequestBuilder`] and turned into the
//! transport's [`HttpRequest`](canvaskit_transport::HttpRequest) without any
//! I/O. Sending is the dispatcher's job.

pub use credentials::{CLIENT_AUTHORIZATION, Credentials};
pub use request::{FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, RequestBuilder};

mod credentials;
mod request;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
