//! Organizations

use serde::{Deserialize, Serialize};

use super::Color;
use crate::decode::{FromResource, ResourceData};
use crate::error::DecodeError;

/// An organization (wire type `orgs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization id
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Number of members
    pub members_count: u64,
    /// Brand color, if set
    #[serde(
        default,
        deserialize_with = "super::lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,
}

impl FromResource for Organization {
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
        Ok(Organization {
            id: data.id().to_string(),
            name: data.attribute("name")?,
            slug: data.attribute("slug")?,
            members_count: data.attribute("members_count")?,
            color: data
                .optional_attribute::<String>("color")?
                .and_then(|hex| Color::from_hex(&hex)),
        })
    }
}
