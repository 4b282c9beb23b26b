//! Canvases

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Organization;
use crate::decode::{FromResource, ResourceData};
use crate::error::DecodeError;

/// Web host canvases are viewed on.
pub const WEB_BASE_URL: &str = "https://usecanvas.com";

/// A canvas document (wire type `canvases`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas id
    pub id: String,
    /// Owning organization
    #[serde(rename = "org")]
    pub organization: Organization,
    /// Whether the current user may edit
    pub is_writable: bool,
    /// Whether anyone with the link may edit
    pub is_public_writable: bool,
    /// Title
    pub title: String,
    /// Plain-text summary of the content
    pub summary: String,
    /// Version of the native document format
    pub native_version: String,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// When the canvas was archived, if it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

impl Canvas {
    /// A canvas with an empty summary has no content.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// Whether the canvas has been archived.
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    /// Web URL of the canvas.
    pub fn url(&self) -> String {
        format!("{WEB_BASE_URL}/{}/-/{}", self.organization.slug, self.id)
    }
}

impl FromResource for Canvas {
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
        Ok(Canvas {
            id: data.id().to_string(),
            organization: data.relationship("org")?,
            is_writable: data.attribute("is_writable")?,
            is_public_writable: data.attribute("is_public_writable")?,
            updated_at: data.attribute("updated_at")?,
            title: data.attribute("title")?,
            summary: data.attribute("summary")?,
            native_version: data.attribute("native_version")?,
            archived_at: data.optional_attribute("archived_at")?,
        })
    }
}
