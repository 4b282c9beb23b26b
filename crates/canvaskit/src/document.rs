//! JSON:API documents
//!
//! A response body is parsed once into a [`Document`]: the primary `data`
//! plus an [`IncludedTable`] of side-loaded resources. Typed values are then
//! pulled out with [`Document::decode_one`] or [`Document::decode_many`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_errors;
use crate::decode::{FromResource, ResourceData};
use crate::error::{Error, Result};
use crate::json::{JsonDictionary, JsonValue, kind_of};

/// Message used when a failure carries nothing more specific.
pub const GENERIC_FAILURE: &str = "Invalid response.";

/// The `(type, id)` pair that names a resource within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Resource type, e.g. `"canvases"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource id
    pub id: String,
}

impl ResourceIdentifier {
    /// Create an identifier.
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// One resource object as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// Resource id
    pub id: String,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
    /// Attribute values
    #[serde(default)]
    pub attributes: JsonDictionary,
    /// Relationships by name
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
}

impl ResourceObject {
    /// The identifier of this resource.
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.clone(), self.id.clone())
    }
}

/// A relationship entry. `data` is `None` when the linkage is null or absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage
    #[serde(default)]
    pub data: Option<Linkage>,
}

/// Relationship linkage: one identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    /// To-one linkage
    One(ResourceIdentifier),
    /// To-many linkage
    Many(Vec<ResourceIdentifier>),
}

/// Side-loaded resources keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct IncludedTable {
    resources: HashMap<ResourceIdentifier, ResourceObject>,
}

impl IncludedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource. A resource already present under the same identifier
    /// is kept and `false` is returned.
    pub fn insert(&mut self, resource: ResourceObject) -> bool {
        match self.resources.entry(resource.identifier()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(resource);
                true
            }
        }
    }

    /// Look up a resource.
    pub fn get(&self, identifier: &ResourceIdentifier) -> Option<&ResourceObject> {
        self.resources.get(identifier)
    }

    /// Number of resources in the table.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl FromIterator<ResourceObject> for IncludedTable {
    fn from_iter<I: IntoIterator<Item = ResourceObject>>(iter: I) -> Self {
        let mut table = IncludedTable::new();
        for resource in iter {
            table.insert(resource);
        }
        table
    }
}

#[derive(Debug, Clone)]
enum PrimaryData {
    One(ResourceObject),
    Many(Vec<ResourceObject>),
}

/// A parsed JSON:API document.
#[derive(Debug, Clone)]
pub struct Document {
    data: Option<PrimaryData>,
    included: IncludedTable,
}

impl Document {
    /// Parse a response body.
    ///
    /// Fails with [`Error::InvalidResponse`] when the body is not a JSON
    /// object, and with [`Error::ServerError`] when it carries a non-empty
    /// `errors` array.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: JsonValue = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidResponse(format!("body is not JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        let mut object = match value {
            JsonValue::Object(object) => object,
            other => {
                return Err(Error::InvalidResponse(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )));
            }
        };

        if let Some(JsonValue::Array(errors)) = object.get("errors") {
            if !errors.is_empty() {
                let message =
                    aggregate_errors(errors).unwrap_or_else(|| GENERIC_FAILURE.to_string());
                return Err(Error::ServerError(message));
            }
        }

        // The table is complete before any relationship is resolved.
        let included = match object.remove("included") {
            None | Some(JsonValue::Null) => IncludedTable::new(),
            Some(JsonValue::Array(items)) => items
                .into_iter()
                .map(resource_object)
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .collect(),
            Some(other) => {
                return Err(Error::InvalidResponse(format!(
                    "included: expected array, found {}",
                    kind_of(&other)
                )));
            }
        };

        let data = match object.remove("data") {
            None | Some(JsonValue::Null) => None,
            Some(item @ JsonValue::Object(_)) => Some(PrimaryData::One(resource_object(item)?)),
            Some(JsonValue::Array(items)) => Some(PrimaryData::Many(
                items
                    .into_iter()
                    .map(resource_object)
                    .collect::<Result<Vec<_>>>()?,
            )),
            Some(other) => {
                return Err(Error::InvalidResponse(format!(
                    "data: expected object or array, found {}",
                    kind_of(&other)
                )));
            }
        };

        Ok(Self { data, included })
    }

    /// The included table.
    pub fn included(&self) -> &IncludedTable {
        &self.included
    }

    /// Decode the primary resource.
    pub fn decode_one<T: FromResource>(&self) -> Result<T> {
        match &self.data {
            Some(PrimaryData::One(resource)) => {
                Ok(T::from_resource(&ResourceData::new(resource, &self.included))?)
            }
            Some(PrimaryData::Many(_)) => Err(Error::InvalidResponse(
                "expected a single resource, found an array".to_string(),
            )),
            None => Err(Error::InvalidResponse("missing primary data".to_string())),
        }
    }

    /// Decode every primary resource, in document order.
    ///
    /// One failing element fails the whole collection.
    pub fn decode_many<T: FromResource>(&self) -> Result<Vec<T>> {
        match &self.data {
            Some(PrimaryData::Many(resources)) => Ok(resources
                .iter()
                .map(|resource| T::from_resource(&ResourceData::new(resource, &self.included)))
                .collect::<std::result::Result<Vec<_>, _>>()?),
            Some(PrimaryData::One(_)) => Err(Error::InvalidResponse(
                "expected a collection, found a single resource".to_string(),
            )),
            None => Err(Error::InvalidResponse("missing primary data".to_string())),
        }
    }
}

fn resource_object(value: JsonValue) -> Result<ResourceObject> {
    serde_json::from_value(value)
        .map_err(|e| Error::InvalidResponse(format!("malformed resource object: {e}")))
}
