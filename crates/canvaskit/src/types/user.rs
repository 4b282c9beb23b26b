//! Users

use serde::{Deserialize, Serialize};
use url::Url;

/// A user, as embedded in an [`Account`](super::Account).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: String,
    /// Username, once chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar image
    #[serde(
        default,
        deserialize_with = "super::lenient::url",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<Url>,
}
