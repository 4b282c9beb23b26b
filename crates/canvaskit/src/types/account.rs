//! Accounts and access tokens

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::User;
use crate::decode::{FromResource, ResourceData};
use crate::error::DecodeError;

/// An access token resource (wire type `access-tokens`).
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    /// Token id
    pub id: String,
    /// The bearer token itself
    pub token: String,
}

impl FromResource for AccessToken {
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
        Ok(AccessToken {
            id: data.id().to_string(),
            token: data.attribute("token")?,
        })
    }
}

/// A signed-in account: the user plus the access token acting for them.
///
/// The dictionary form is the token grant returned by the OAuth endpoint:
///
/// ```json
/// {"access_token": "…", "account": {"email": "…", "user": {…}, "verified_at": "…"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AccountRecord", into = "AccountRecord")]
pub struct Account {
    /// Account id, always the user's id
    pub id: String,
    /// Bearer token for the main API
    pub access_token: String,
    /// Email address
    pub email: String,
    /// When the email address was verified
    pub verified_at: Option<DateTime<Utc>>,
    /// The account's user
    pub user: User,
}

impl Account {
    /// Whether the email address has been verified.
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }
}

impl FromResource for Account {
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
        let token: AccessToken = data.relationship("verification_access_token")?;
        let username: String = data.attribute("username")?;
        let avatar_url: Url = data.attribute("avatar_url")?;

        Ok(Account {
            id: data.id().to_string(),
            access_token: token.token,
            email: data.attribute("email")?,
            verified_at: data.optional_attribute("verified_at")?,
            user: User {
                id: data.id().to_string(),
                username: Some(username),
                avatar_url: Some(avatar_url),
            },
        })
    }
}

#[derive(Serialize, Deserialize)]
struct AccountRecord {
    access_token: String,
    account: AccountBody,
}

#[derive(Serialize, Deserialize)]
struct AccountBody {
    email: String,
    user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verified_at: Option<DateTime<Utc>>,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account {
            id: record.account.user.id.clone(),
            access_token: record.access_token,
            email: record.account.email,
            verified_at: record.account.verified_at,
            user: record.account.user,
        }
    }
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        AccountRecord {
            access_token: account.access_token,
            account: AccountBody {
                email: account.email,
                user: account.user,
                verified_at: account.verified_at,
            },
        }
    }
}
