//! Main client implementation for the Canvas API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use canvaskit_transport::Transport;
use http::Method;
use secrecy::SecretString;
use url::Url;

use crate::{
    authorization::AuthorizationClient,
    config::ClientConfig,
    dispatch::{CompletionQueue, Dispatcher},
    error::{Error, Result},
    http::RequestBuilder,
    oauth::OAuthClient,
    resources::{Canvases, Organizations, Projects},
    session::Session,
};

/// Main client for the Canvas API, authenticated with a bearer access token.
///
/// Cloning is cheap; clones share endpoints, transport and completion queue.
///
/// # Example
///
/// ```rust,no_run
/// use canvaskit::Client;
///
/// # async fn example() -> canvaskit::Result<()> {
/// let client = Client::new("access-token")?;
/// for canvas in client.canvases().list(None).await? {
///     println!("{} ({})", canvas.title, canvas.url());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    session: Session,

    // Endpoint groups, created on first use
    projects: OnceLock<Projects>,
    canvases: OnceLock<Canvases>,
    organizations: OnceLock<Organizations>,
}

impl Client {
    /// Create a client with an access token and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the default transport or the completion queue
    /// cannot be started.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] without an access token and
    /// [`Error::InvalidUrl`] for an unusable base URL.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    fn from_session(session: Session) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                session,
                projects: OnceLock::new(),
                canvases: OnceLock::new(),
                organizations: OnceLock::new(),
            }),
        }
    }

    /// Access the Projects API endpoint.
    pub fn projects(&self) -> &Projects {
        self.inner
            .projects
            .get_or_init(|| Projects::new(self.inner.session.clone()))
    }

    /// Access the Canvases API endpoint.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example(client: canvaskit::Client) -> canvaskit::Result<()> {
    /// let canvas = client.canvases().create("project-id", None, Some(false)).await?;
    /// client.canvases().archive(&canvas.id).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn canvases(&self) -> &Canvases {
        self.inner
            .canvases
            .get_or_init(|| Canvases::new(self.inner.session.clone()))
    }

    /// Access the Organizations API endpoint.
    pub fn organizations(&self) -> &Organizations {
        self.inner
            .organizations
            .get_or_init(|| Organizations::new(self.inner.session.clone()))
    }

    /// Start a custom request carrying this client's credentials.
    ///
    /// Build it and hand it to [`dispatcher`](Self::dispatcher) to send.
    pub fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder {
        self.inner.session.request(method, path)
    }

    /// The dispatcher requests are sent through.
    pub fn dispatcher(&self) -> &Dispatcher {
        self.inner.session.dispatcher()
    }

    /// The completion queue results are delivered on.
    pub fn completion_queue(&self) -> &CompletionQueue {
        self.dispatcher().completion_queue()
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        self.inner.session.base_url()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url().as_str())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`], [`AuthorizationClient`] and [`OAuthClient`].
///
/// The three façades can share one transport and one completion queue:
///
/// ```rust,no_run
/// use canvaskit::{Client, CompletionQueue};
///
/// # fn example() -> canvaskit::Result<()> {
/// let queue = CompletionQueue::spawn()?;
/// let oauth = Client::builder()
///     .client_credentials("client-id", "client-secret")
///     .completion_queue(queue.clone())
///     .build_oauth_client()?;
/// let api = Client::builder()
///     .access_token("token")
///     .completion_queue(queue)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    completions: Option<CompletionQueue>,
}

impl ClientBuilder {
    /// Merge `config` into the settings collected so far.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Set the access token for the main API.
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = Some(SecretString::new(access_token.into().into_boxed_str()));
        self
    }

    /// Set the client id and secret for the authorization and OAuth APIs.
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.config.client_id = Some(client_id.into());
        self.config.client_secret = Some(SecretString::new(client_secret.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a custom default header.
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

    /// Send requests through `transport` instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Deliver results on `queue` instead of a queue of the client's own.
    pub fn completion_queue(mut self, queue: CompletionQueue) -> Self {
        self.completions = Some(queue);
        self
    }

    fn session(self, credentials: crate::http::Credentials) -> Result<Session> {
        Session::from_config(&self.config, credentials, self.transport, self.completions)
    }

    /// Build the main API client. Requires an access token.
    pub fn build(self) -> Result<Client> {
        let credentials = self.config.bearer_credentials()?;
        Ok(Client::from_session(self.session(credentials)?))
    }

    /// Build the account authorization client. Requires client credentials.
    pub fn build_authorization_client(self) -> Result<AuthorizationClient> {
        let credentials = self.config.client_credentials()?;
        Ok(AuthorizationClient::from_session(self.session(credentials)?))
    }

    /// Build the OAuth client. Requires client credentials.
    pub fn build_oauth_client(self) -> Result<OAuthClient> {
        let credentials = self.config.client_credentials()?;
        Ok(OAuthClient::from_session(self.session(credentials)?))
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .field("completions", &self.completions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .access_token("test-token")
            .base_url("https://example.com/v1/")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "https://example.com/v1/");
    }

    #[test]
    fn test_client_new_uses_default_base_url() {
        let client = Client::new("test-token").unwrap();
        assert_eq!(client.base_url().as_str(), crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_requires_access_token() {
        let err = Client::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingConfig(_)));

        let err = Client::builder()
            .access_token("token")
            .build_oauth_client()
            .unwrap_err();
        assert!(matches!(err, Error::MissingConfig(_)));
    }

    #[test]
    fn test_client_from_config_invalid_scheme() {
        let mut config = ClientConfig::with_access_token("token");
        config.base_url = Some("ftp://invalid.example.com".to_string());

        match Client::from_config(config) {
            Err(Error::InvalidUrl(msg)) => assert!(msg.contains("ftp")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_resource_lazy_initialization() {
        let client = Client::new("test-token").unwrap();

        assert!(std::ptr::eq(client.projects(), client.projects()));
        assert!(std::ptr::eq(client.canvases(), client.canvases()));
        assert!(std::ptr::eq(client.organizations(), client.organizations()));

        let clone = client.clone();
        assert!(std::ptr::eq(client.canvases(), clone.canvases()));
    }

    #[test]
    fn test_shared_completion_queue() {
        let queue = CompletionQueue::named("shared-queue").unwrap();
        let client = Client::builder()
            .access_token("token")
            .completion_queue(queue.clone())
            .build()
            .unwrap();
        let oauth = Client::builder()
            .client_credentials("id", "secret")
            .completion_queue(queue)
            .build_oauth_client()
            .unwrap();

        assert_eq!(client.completion_queue().name(), "shared-queue");
        assert_eq!(oauth.completion_queue().name(), "shared-queue");
    }

    #[test]
    fn test_custom_request_carries_credentials() {
        let client = Client::builder()
            .access_token("token")
            .default_header("x-client", "tests")
            .unwrap()
            .build()
            .unwrap();

        let request = client.request(Method::GET, "projects").build().unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer token"));
        assert_eq!(request.header("x-client"), Some("tests"));
    }
}
