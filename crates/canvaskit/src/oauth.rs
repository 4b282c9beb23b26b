//! OAuth client
//!
//! Exchanges a username and password for an access token, and revokes
//! tokens. Both endpoints take form-encoded bodies.

use canvaskit_transport::HttpResponse;
use http::Method;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::dispatch::{CompletionQueue, Created, Shape};
use crate::document::GENERIC_FAILURE;
use crate::error::{Error, Result};
use crate::json::JsonValue;
use crate::session::Session;
use crate::types::Account;

/// Message for rejected credentials.
pub const INVALID_CREDENTIALS: &str = "Username/email or password incorrect.";

/// Decode target of a password grant: `{access_token, account}`.
///
/// Failures surface the server's `message`, map an
/// `invalid_resource_owner` error to [`INVALID_CREDENTIALS`], and fall back
/// to a generic message.
pub struct AccessGrant;

impl Shape for AccessGrant {
    type Output = Account;

    fn from_response(response: &HttpResponse) -> Result<Account> {
        let body: JsonValue = serde_json::from_slice(&response.body)
            .map_err(|e| Error::InvalidResponse(format!("body is not JSON: {e}")))?;

        if body.get("access_token").is_some_and(JsonValue::is_string)
            && let Ok(account) = serde_json::from_value::<Account>(body.clone())
        {
            return Ok(account);
        }

        if let Some(message) = body.get("message").and_then(JsonValue::as_str) {
            return Err(Error::ServerError(message.to_string()));
        }

        if body.get("error").and_then(JsonValue::as_str) == Some("invalid_resource_owner") {
            return Err(Error::ServerError(INVALID_CREDENTIALS.to_string()));
        }

        Err(Error::ServerError(GENERIC_FAILURE.to_string()))
    }
}

/// Client for the OAuth endpoints, authenticated with client credentials.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    session: Session,
}

impl OAuthClient {
    /// Create a client with default settings.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Client::builder()
            .client_credentials(client_id, client_secret)
            .build_oauth_client()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Client::builder().config(config).build_oauth_client()
    }

    pub(crate) fn from_session(session: Session) -> Self {
        Self { session }
    }

    /// Sign in with a username (or email) and password.
    pub async fn create_access_token(&self, username: &str, password: &str) -> Result<Account> {
        let request = self
            .session
            .request(Method::POST, "oauth/access-tokens")
            .form([
                ("username", username),
                ("password", password),
                ("scope", "global"),
                ("grant_type", "password"),
            ]);
        self.session.send::<AccessGrant>(request).await
    }

    /// Revoke an access token. Succeeds only on `201 Created`.
    pub async fn revoke_access_token(&self, access_token: &str) -> Result<()> {
        let request = self
            .session
            .request(Method::POST, "oauth/access-tokens/actions/revoke")
            .form([("access_token", access_token)]);
        self.session.send::<Created>(request).await
    }

    /// The completion queue results are delivered on.
    pub fn completion_queue(&self) -> &CompletionQueue {
        self.session.dispatcher().completion_queue()
    }
}
