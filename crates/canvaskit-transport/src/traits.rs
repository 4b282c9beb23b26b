//! The [`Transport`] seam and the request and response values crossing it

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use crate::error::Result;

/// A request ready to go on the wire.
///
/// The SDK sets every header and encodes the body before handing it over;
/// transports add nothing but connection-level concerns.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb
    pub method: Method,

    /// Request URL, including any query string
    pub url: Url,

    /// Headers, credentials included
    pub headers: HeaderMap,

    /// Encoded JSON or form body; `None` for reads
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A bodiless request without headers.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Replace the value of `name`.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach an encoded body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Header value as text. `None` when absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Whatever the server answered, error statuses included.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: StatusCode,

    /// Headers as received
    pub headers: HeaderMap,

    /// Raw body; empty when the server sent none
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Assemble a response, usually in a transport or a test double.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// `2xx`
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `4xx` or `5xx`
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Body as text, lossily decoded. Meant for logs and diagnostics.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Header value as text, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends one [`HttpRequest`].
///
/// The SDK holds its transport as `Arc<dyn Transport>`, so tests swap in a
/// double and applications can route through their own stack.
/// Implementations resolve each call at most once: either with the response
/// the server produced (whatever its status) or with the error that kept a
/// response from existing.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` once.
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;
}
