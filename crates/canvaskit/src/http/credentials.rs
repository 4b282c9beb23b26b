//! Request credentials

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Header carrying client credentials on authorization and OAuth requests.
pub const CLIENT_AUTHORIZATION: HeaderName = HeaderName::from_static("client-authorization");

/// How a request authenticates.
#[derive(Clone)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`
    Bearer(SecretString),
    /// `Client-Authorization: Basic base64(id:secret)`
    Client {
        /// OAuth client id
        id: String,
        /// OAuth client secret
        secret: SecretString,
    },
}

impl Credentials {
    /// Bearer access token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(SecretString::new(token.into().into_boxed_str()))
    }

    /// Client id/secret credentials.
    pub fn client(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials::Client {
            id: id.into(),
            secret: SecretString::new(secret.into().into_boxed_str()),
        }
    }

    /// The header this credential is sent in, with its value marked sensitive.
    pub fn header(&self) -> Result<(HeaderName, HeaderValue)> {
        let (name, value) = match self {
            Credentials::Bearer(token) => (
                http::header::AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            ),
            Credentials::Client { id, secret } => {
                let pair = format!("{id}:{}", secret.expose_secret());
                (
                    CLIENT_AUTHORIZATION,
                    format!("Basic {}", STANDARD.encode(pair)),
                )
            }
        };

        let mut value = HeaderValue::from_str(&value)
            .map_err(|_| Error::InvalidHeaderValue(format!("{name} credentials")))?;
        value.set_sensitive(true);
        Ok((name, value))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Credentials::Client { id, .. } => f
                .debug_struct("Client")
                .field("id", id)
                .field("secret", &"[REDACTED]")
                .finish(),
        }
    }
}
