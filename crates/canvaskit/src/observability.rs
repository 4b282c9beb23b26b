//! Structured logging for dispatched requests
//!
//! A [`RequestTrace`] follows one request from the moment it leaves until
//! its [`Shape`](crate::Shape) has decoded the response. Failures carry a
//! category from [`failure_kind`] so that decode problems can be told apart
//! from server rejections. The library never installs a subscriber.

use std::time::{Duration, Instant};

use canvaskit_transport::{HttpRequest, TransportError};
use http::{Method, StatusCode};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Log state for one in-flight request.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    method: Method,
    path: String,
    query: Option<String>,
    body_size: Option<usize>,
    shape: String,
    started: Instant,
}

impl RequestTrace {
    /// Start tracing `request`, decoded with shape `S`, and log its departure.
    pub fn begin<S>(request: &HttpRequest) -> Self {
        let trace = Self {
            method: request.method.clone(),
            path: request.url.path().to_string(),
            query: request.url.query().map(str::to_string),
            body_size: request.body.as_ref().map(Vec::len),
            shape: short_type_name(std::any::type_name::<S>()),
            started: Instant::now(),
        };

        debug!(
            method = %trace.method,
            path = %trace.path,
            query = trace.query.as_deref(),
            body_size = trace.body_size,
            shape = %trace.shape,
            "Sending request"
        );
        trace
    }

    /// HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL path of the request.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Size of the request body in bytes.
    pub fn body_size(&self) -> Option<usize> {
        self.body_size
    }

    /// Decode target, without module paths (`Collection<Canvas>`).
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Time since the request left.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log a request that never got a response.
    pub fn transport_failed(&self, error: &TransportError) {
        warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms = self.elapsed().as_millis(),
            error = %error,
            "Request failed in transport"
        );
    }

    /// Log the decoded outcome of a response.
    pub fn completed<T>(&self, status: StatusCode, body_size: usize, result: &Result<T>) {
        let elapsed_ms = self.elapsed().as_millis();
        match result {
            Ok(_) => info!(
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                elapsed_ms,
                body_size,
                shape = %self.shape,
                "Request completed"
            ),
            Err(error) => warn!(
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                elapsed_ms,
                body_size,
                shape = %self.shape,
                kind = failure_kind(error),
                field = error.as_decode_error().map(|e| e.field()),
                error = %error,
                "Request failed"
            ),
        }
    }
}

/// Short category of an error, used as the `kind` log field.
pub fn failure_kind(error: &Error) -> &'static str {
    match error {
        Error::Transport(_) => "transport",
        Error::ServerError(_) => "server",
        Error::Decode(_) => "decode",
        Error::InvalidResponse(_) => "invalid_response",
        Error::CompletionQueueClosed => "completion_queue",
        Error::WithContext { source, .. } => match source.downcast_ref::<Error>() {
            Some(inner) => failure_kind(inner),
            None => "client",
        },
        _ => "client",
    }
}

/// Strip module paths from a type name, generics included.
fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&') {
            short.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            short.push(c);
        } else {
            segment.push(c);
        }
    }
    short.push_str(segment.rsplit("::").next().unwrap_or_default());
    short
}
