//! Account authorization client
//!
//! Signs up and verifies accounts on behalf of an OAuth client application.

use http::Method;
use serde_json::json;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::dispatch::{CompletionQueue, Created, Single};
use crate::error::Result;
use crate::json::dictionary;
use crate::session::Session;
use crate::types::Account;

/// Content type the account endpoints expect.
const ACCOUNT_CONTENT_TYPE: &str = "application/json";

/// Client for the account endpoints, authenticated with client credentials.
#[derive(Debug, Clone)]
pub struct AuthorizationClient {
    session: Session,
}

impl AuthorizationClient {
    /// Create a client with default settings.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Client::builder()
            .client_credentials(client_id, client_secret)
            .build_authorization_client()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Client::builder().config(config).build_authorization_client()
    }

    pub(crate) fn from_session(session: Session) -> Self {
        Self { session }
    }

    /// Sign up a new account.
    ///
    /// Succeeds only when the server answers `201 Created`; validation
    /// failures come back as one message such as `"Username is taken."`.
    pub async fn create_account(&self, email: &str, username: &str, password: &str) -> Result<()> {
        let parameters = dictionary(json!({
            "data": {
                "type": "account",
                "attributes": {
                    "email": email,
                    "password": password,
                    "username": username
                }
            }
        }));
        let request = self
            .session
            .request(Method::POST, "account")
            .content_type(ACCOUNT_CONTENT_TYPE)
            .parameters(parameters);
        self.session.send::<Created>(request).await
    }

    /// Verify an account with the token from its verification email.
    pub async fn verify_account(&self, token: &str) -> Result<Account> {
        let parameters = dictionary(json!({
            "data": {
                "type": "account",
                "attributes": {"verification_token": token}
            }
        }));
        let request = self
            .session
            .request(Method::POST, "account/actions/verify")
            .content_type(ACCOUNT_CONTENT_TYPE)
            .parameters(parameters);
        self.session.send::<Single<Account>>(request).await
    }

    /// The completion queue results are delivered on.
    pub fn completion_queue(&self) -> &CompletionQueue {
        self.session.dispatcher().completion_queue()
    }
}
