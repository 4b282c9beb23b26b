//! Projects

use serde::{Deserialize, Serialize};

use super::Color;
use crate::decode::{FromResource, ResourceData};
use crate::error::DecodeError;

/// A project (wire type `projects`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project id
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Whether this is the owner's personal project
    #[serde(rename = "isPersonal")]
    pub is_personal: bool,
    /// Number of members
    pub members_count: u64,
    /// Project color, if set
    #[serde(
        default,
        deserialize_with = "super::lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,
}

impl FromResource for Project {
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
        Ok(Project {
            id: data.id().to_string(),
            name: data.attribute("name")?,
            slug: data.attribute("slug")?,
            is_personal: data.attribute("isPersonal")?,
            members_count: data.attribute("members_count")?,
            color: data
                .optional_attribute::<String>("color")?
                .and_then(|hex| Color::from_hex(&hex)),
        })
    }
}
