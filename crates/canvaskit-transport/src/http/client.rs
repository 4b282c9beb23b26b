//! reqwest-backed transport
//!
//! One call is one attempt. A non-2xx status is still a successful exchange;
//! only failures to get a response at all are errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};

/// Transport sending requests with a pooled reqwest client.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport with [`HttpTransportConfig::default`].
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a transport with custom settings.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let mut builder = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(idle) = config.pool_idle_timeout {
            builder = builder.pool_idle_timeout(idle);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Settings this transport was built with.
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Whole-request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut outgoing = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            outgoing = outgoing.body(body);
        }

        let response = outgoing.send().await.map_err(|e| {
            debug!(error = %e, "reqwest send failed");
            TransportError::from(e)
        })?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse::new(status, headers, body))
}

/// Settings for [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Whole-request timeout, body included
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// How long idle pooled connections are kept; reqwest's default if unset
    pub pool_idle_timeout: Option<Duration>,
}

impl HttpTransportConfig {
    /// Default settings with a different request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
            pool_idle_timeout: None,
        }
    }
}
