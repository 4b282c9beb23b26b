//! Configuration for the Canvas clients

use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};
use crate::http::Credentials;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.usecanvas.com/v1/";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration shared by [`Client`](crate::Client),
/// [`AuthorizationClient`](crate::AuthorizationClient) and
/// [`OAuthClient`](crate::OAuthClient).
///
/// The main client needs an access token; the authorization and OAuth
/// clients need a client id and secret.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer access token for the main API
    pub access_token: Option<SecretString>,

    /// OAuth client id
    pub client_id: Option<String>,

    /// OAuth client secret
    pub client_secret: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Timeout applied by the default transport
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            client_id: None,
            client_secret: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an access token.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(SecretString::new(access_token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Create a new configuration with client credentials.
    pub fn with_client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(SecretString::new(client_secret.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, without
    /// overriding variables that are already set. This will look for:
    /// - `CANVAS_ACCESS_TOKEN` for the main API
    /// - `CANVAS_CLIENT_ID` and `CANVAS_CLIENT_SECRET` for client credentials
    /// - `CANVAS_BASE_URL` for the API base URL
    /// - `CANVAS_TIMEOUT` for request timeout (in seconds)
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(token) = env::var("CANVAS_ACCESS_TOKEN") {
            config.access_token = Some(SecretString::new(token.into_boxed_str()));
        }
        if let Ok(client_id) = env::var("CANVAS_CLIENT_ID") {
            config.client_id = Some(client_id);
        }
        if let Ok(client_secret) = env::var("CANVAS_CLIENT_SECRET") {
            config.client_secret = Some(SecretString::new(client_secret.into_boxed_str()));
        }
        if let Ok(base_url) = env::var("CANVAS_BASE_URL") {
            config.base_url = Some(base_url);
        }
        if let Ok(timeout_str) = env::var("CANVAS_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.access_token.is_some() {
            self.access_token = other.access_token;
        }
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.client_secret.is_some() {
            self.client_secret = other.client_secret;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }

        self
    }

    /// The validated base URL: non-empty, `http` or `https`.
    pub fn resolved_base_url(&self) -> Result<Url> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim();
        if raw.is_empty() {
            return Err(Error::InvalidUrl("base URL is empty".to_string()));
        }

        let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::InvalidUrl(format!(
                "{raw}: unsupported scheme {scheme:?}"
            ))),
        }
    }

    /// Bearer credentials from the access token.
    pub(crate) fn bearer_credentials(&self) -> Result<Credentials> {
        self.access_token
            .as_ref()
            .map(|token| Credentials::Bearer(token.clone()))
            .ok_or_else(|| Error::MissingConfig("access token".to_string()))
    }

    /// Client credentials from the client id and secret.
    pub(crate) fn client_credentials(&self) -> Result<Credentials> {
        let id = self
            .client_id
            .as_ref()
            .ok_or_else(|| Error::MissingConfig("client id".to_string()))?;
        let secret = self
            .client_secret
            .as_ref()
            .ok_or_else(|| Error::MissingConfig("client secret".to_string()))?;
        Ok(Credentials::client(id.clone(), secret.expose_secret()))
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access token.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = Some(SecretString::new(access_token.into().into_boxed_str()));
        self
    }

    /// Set the client id and secret.
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.config.client_id = Some(client_id.into());
        self.config.client_secret = Some(SecretString::new(client_secret.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is not valid HTTP.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
