//! Shared request plumbing for the client façades

use std::sync::Arc;

use canvaskit_transport::{HttpTransport, HttpTransportConfig, Transport};
use http::{HeaderMap, Method};
use url::Url;

use crate::config::ClientConfig;
use crate::dispatch::{CompletionQueue, Dispatcher, Shape};
use crate::error::Result;
use crate::http::{Credentials, RequestBuilder};

/// Base URL, credentials and dispatcher of one façade.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    base_url: Url,
    credentials: Credentials,
    default_headers: HeaderMap,
    dispatcher: Dispatcher,
}

impl Session {
    /// Build a session from `config`. A reqwest transport honouring the
    /// configured timeout and a fresh completion queue are created unless
    /// given.
    pub(crate) fn from_config(
        config: &ClientConfig,
        credentials: Credentials,
        transport: Option<Arc<dyn Transport>>,
        completions: Option<CompletionQueue>,
    ) -> Result<Self> {
        let base_url = config.resolved_base_url()?;

        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::with_config(HttpTransportConfig::with_timeout(
                config.timeout,
            ))?),
        };
        let completions = match completions {
            Some(completions) => completions,
            None => CompletionQueue::spawn()?,
        };

        Ok(Self {
            base_url,
            credentials,
            default_headers: config.default_headers.clone(),
            dispatcher: Dispatcher::new(transport, completions),
        })
    }

    /// Start a request for `path` carrying this session's credentials.
    pub(crate) fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, &self.base_url, path)
            .headers(&self.default_headers)
            .credentials(self.credentials.clone())
    }

    /// Build and send `builder`, decoding the response as `S`. A request
    /// that fails to build is reported through the completion queue too.
    pub(crate) async fn send<S: Shape>(&self, builder: RequestBuilder) -> Result<S::Output> {
        match builder.build() {
            Ok(request) => self.dispatcher.send::<S>(request).await,
            Err(error) => self.dispatcher.fail(error).await,
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
