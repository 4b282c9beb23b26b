//! Resource decoding
//!
//! Domain types implement [`FromResource`] and read their fields through a
//! [`ResourceData`] context:
//!
//! ```
//! use canvaskit::{DecodeError, FromResource, ResourceData};
//!
//! struct Team {
//!     id: String,
//!     name: String,
//!     size: Option<u64>,
//! }
//!
//! impl FromResource for Team {
//!     fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
//!         Ok(Team {
//!             id: data.id().to_string(),
//!             name: data.attribute("name")?,
//!             size: data.optional_attribute("size")?,
//!         })
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use url::Url;

use crate::document::{IncludedTable, Linkage, ResourceObject};
use crate::error::DecodeError;
use crate::json::{JsonDictionary, JsonValue, kind_of};

/// A type that can be constructed from one JSON:API resource object.
pub trait FromResource: Sized {
    /// Decode `Self` from the resource behind `data`.
    fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError>;
}

/// A type an attribute value can be coerced into.
pub trait FromAttribute: Sized {
    /// Description of the accepted JSON, used in mismatch errors.
    fn expected() -> String;

    /// Coerce a non-null value. On failure, returns a description of what was
    /// found instead.
    fn from_attribute(value: &JsonValue) -> Result<Self, String>;
}

fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Number(n) => format!("number {n}"),
        other => kind_of(other).to_string(),
    }
}

impl FromAttribute for String {
    fn expected() -> String {
        "string".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_str().map(str::to_string).ok_or_else(|| describe(value))
    }
}

impl FromAttribute for bool {
    fn expected() -> String {
        "boolean".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_bool().ok_or_else(|| describe(value))
    }
}

impl FromAttribute for i64 {
    fn expected() -> String {
        "integer".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_i64().ok_or_else(|| describe(value))
    }
}

impl FromAttribute for u64 {
    fn expected() -> String {
        "unsigned integer".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_u64().ok_or_else(|| describe(value))
    }
}

impl FromAttribute for u32 {
    fn expected() -> String {
        "unsigned 32-bit integer".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| describe(value))
    }
}

impl FromAttribute for f64 {
    fn expected() -> String {
        "number".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_f64().ok_or_else(|| describe(value))
    }
}

impl FromAttribute for DateTime<Utc> {
    fn expected() -> String {
        "ISO-8601 date".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        let text = value.as_str().ok_or_else(|| describe(value))?;
        DateTime::parse_from_rfc3339(text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|_| format!("string {text:?}"))
    }
}

impl FromAttribute for Url {
    fn expected() -> String {
        "URL".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        let text = value.as_str().ok_or_else(|| describe(value))?;
        Url::parse(text).map_err(|_| format!("string {text:?}"))
    }
}

impl FromAttribute for JsonValue {
    fn expected() -> String {
        "any JSON value".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        Ok(value.clone())
    }
}

impl FromAttribute for JsonDictionary {
    fn expected() -> String {
        "object".into()
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        value.as_object().cloned().ok_or_else(|| describe(value))
    }
}

impl<T: FromAttribute> FromAttribute for Vec<T> {
    fn expected() -> String {
        format!("array of {}", T::expected())
    }

    fn from_attribute(value: &JsonValue) -> Result<Self, String> {
        let items = value.as_array().ok_or_else(|| describe(value))?;
        items
            .iter()
            .map(|item| {
                if item.is_null() {
                    Err("array containing null".to_string())
                } else {
                    T::from_attribute(item).map_err(|actual| format!("array containing {actual}"))
                }
            })
            .collect()
    }
}

/// Decode context: one resource object plus the document's included table.
#[derive(Debug, Clone, Copy)]
pub struct ResourceData<'a> {
    resource: &'a ResourceObject,
    included: &'a IncludedTable,
}

impl<'a> ResourceData<'a> {
    /// Create a context over `resource`, resolving relationships in `included`.
    pub fn new(resource: &'a ResourceObject, included: &'a IncludedTable) -> Self {
        Self { resource, included }
    }

    /// Resource id.
    pub fn id(&self) -> &'a str {
        &self.resource.id
    }

    /// Resource type.
    pub fn kind(&self) -> &'a str {
        &self.resource.kind
    }

    /// The raw attribute map.
    pub fn attributes(&self) -> &'a JsonDictionary {
        &self.resource.attributes
    }

    /// Required attribute. Absent or null is [`DecodeError::MissingAttribute`].
    pub fn attribute<T: FromAttribute>(&self, name: &str) -> Result<T, DecodeError> {
        self.optional_attribute(name)?
            .ok_or_else(|| DecodeError::MissingAttribute(name.to_string()))
    }

    /// Optional attribute. Absent or null is `None`; a value of the wrong
    /// type is still an error.
    pub fn optional_attribute<T: FromAttribute>(
        &self,
        name: &str,
    ) -> Result<Option<T>, DecodeError> {
        match self.resource.attributes.get(name) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(value) => T::from_attribute(value)
                .map(Some)
                .map_err(|actual| DecodeError::TypeMismatch {
                    field: name.to_string(),
                    expected: T::expected(),
                    actual,
                }),
        }
    }

    /// Required to-one relationship, decoded from the included table.
    pub fn relationship<R: FromResource>(&self, name: &str) -> Result<R, DecodeError> {
        self.optional_relationship(name)?
            .ok_or_else(|| DecodeError::MissingRelationship(name.to_string()))
    }

    /// Optional to-one relationship. An absent relationship or null linkage
    /// is `None`; a linkage whose target is not included is still an error.
    pub fn optional_relationship<R: FromResource>(
        &self,
        name: &str,
    ) -> Result<Option<R>, DecodeError> {
        let linkage = self
            .resource
            .relationships
            .get(name)
            .and_then(|relationship| relationship.data.as_ref());

        match linkage {
            None => Ok(None),
            Some(Linkage::One(identifier)) => {
                let target = self
                    .included
                    .get(identifier)
                    .ok_or_else(|| DecodeError::MissingRelationship(name.to_string()))?;
                R::from_resource(&ResourceData::new(target, self.included))
                    .map(Some)
                    .map_err(|e| e.within(name))
            }
            Some(Linkage::Many(_)) => Err(DecodeError::TypeMismatch {
                field: name.to_string(),
                expected: "to-one relationship".into(),
                actual: "array".into(),
            }),
        }
    }

    /// To-many relationship, in linkage order. A null linkage is empty; a
    /// to-one linkage yields one element.
    pub fn relationships<R: FromResource>(&self, name: &str) -> Result<Vec<R>, DecodeError> {
        let relationship = self
            .resource
            .relationships
            .get(name)
            .ok_or_else(|| DecodeError::MissingRelationship(name.to_string()))?;

        let identifiers = match &relationship.data {
            None => return Ok(Vec::new()),
            Some(Linkage::One(identifier)) => std::slice::from_ref(identifier),
            Some(Linkage::Many(identifiers)) => identifiers.as_slice(),
        };

        identifiers
            .iter()
            .enumerate()
            .map(|(index, identifier)| {
                let path = format!("{name}[{index}]");
                let target = self
                    .included
                    .get(identifier)
                    .ok_or_else(|| DecodeError::MissingRelationship(path.clone()))?;
                R::from_resource(&ResourceData::new(target, self.included))
                    .map_err(|e| e.within(&path))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResourceIdentifier;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Org {
        slug: String,
    }

    impl FromResource for Org {
        fn from_resource(data: &ResourceData<'_>) -> Result<Self, DecodeError> {
            Ok(Org {
                slug: data.attribute("slug")?,
            })
        }
    }

    fn resource(value: JsonValue) -> ResourceObject {
        serde_json::from_value(value).unwrap()
    }

    fn table(values: Vec<JsonValue>) -> IncludedTable {
        values.into_iter().map(resource).collect()
    }

    #[test]
    fn test_scalar_attributes() {
        let obj = resource(json!({
            "id": "1",
            "type": "things",
            "attributes": {
                "name": "Widget",
                "count": 3,
                "ratio": 0.5,
                "enabled": true,
                "updated_at": "2016-05-02T18:00:00Z",
                "link": "https://example.com/a",
                "tags": ["a", "b"]
            }
        }));
        let included = IncludedTable::new();
        let data = ResourceData::new(&obj, &included);

        assert_eq!(data.id(), "1");
        assert_eq!(data.kind(), "things");
        assert_eq!(data.attribute::<String>("name").unwrap(), "Widget");
        assert_eq!(data.attribute::<u64>("count").unwrap(), 3);
        assert_eq!(data.attribute::<i64>("count").unwrap(), 3);
        assert_eq!(data.attribute::<f64>("count").unwrap(), 3.0);
        assert_eq!(data.attribute::<f64>("ratio").unwrap(), 0.5);
        assert!(data.attribute::<bool>("enabled").unwrap());
        assert_eq!(
            data.attribute::<DateTime<Utc>>("updated_at").unwrap(),
            Utc.with_ymd_and_hms(2016, 5, 2, 18, 0, 0).unwrap()
        );
        assert_eq!(
            data.attribute::<Url>("link").unwrap().as_str(),
            "https://example.com/a"
        );
        assert_eq!(data.attribute::<Vec<String>>("tags").unwrap(), ["a", "b"]);
        assert_eq!(data.attribute::<JsonValue>("tags").unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_missing_and_null_attributes() {
        let obj = resource(json!({
            "id": "1",
            "type": "things",
            "attributes": {"color": null}
        }));
        let included = IncludedTable::new();
        let data = ResourceData::new(&obj, &included);

        assert_eq!(
            data.attribute::<String>("slug").unwrap_err(),
            DecodeError::MissingAttribute("slug".into())
        );
        assert_eq!(
            data.attribute::<String>("color").unwrap_err(),
            DecodeError::MissingAttribute("color".into())
        );
        assert_eq!(data.optional_attribute::<String>("color").unwrap(), None);
        assert_eq!(data.optional_attribute::<String>("slug").unwrap(), None);
    }

    #[test]
    fn test_type_mismatch() {
        let obj = resource(json!({
            "id": "1",
            "type": "things",
            "attributes": {
                "count": "three",
                "negative": -1,
                "when": "yesterday",
                "mixed": ["a", 1]
            }
        }));
        let included = IncludedTable::new();
        let data = ResourceData::new(&obj, &included);

        assert_eq!(
            data.attribute::<u64>("count").unwrap_err().to_string(),
            "count: expected unsigned integer, found string"
        );
        assert_eq!(
            data.optional_attribute::<u64>("count").unwrap_err().field(),
            "count"
        );
        assert_eq!(
            data.attribute::<u64>("negative").unwrap_err().to_string(),
            "negative: expected unsigned integer, found number -1"
        );
        assert_eq!(
            data.attribute::<DateTime<Utc>>("when").unwrap_err().to_string(),
            "when: expected ISO-8601 date, found string \"yesterday\""
        );
        assert_eq!(
            data.attribute::<Vec<String>>("mixed").unwrap_err().to_string(),
            "mixed: expected array of string, found array containing number 1"
        );
    }

    #[test]
    fn test_relationship_resolves_through_included() {
        let obj = resource(json!({
            "id": "c1",
            "type": "canvases",
            "relationships": {"org": {"data": {"type": "orgs", "id": "o1"}}}
        }));
        let included = table(vec![json!({
            "id": "o1",
            "type": "orgs",
            "attributes": {"slug": "acme"}
        })]);
        let data = ResourceData::new(&obj, &included);

        assert_eq!(
            data.relationship::<Org>("org").unwrap(),
            Org {
                slug: "acme".into()
            }
        );
    }

    #[test]
    fn test_relationship_failures() {
        let obj = resource(json!({
            "id": "c1",
            "type": "canvases",
            "relationships": {
                "org": {"data": {"type": "orgs", "id": "o1"}},
                "ghost": {"data": {"type": "orgs", "id": "missing"}},
                "nothing": {"data": null},
                "members": {"data": [{"type": "orgs", "id": "o1"}]}
            }
        }));
        let included = table(vec![json!({"id": "o1", "type": "orgs", "attributes": {}})]);
        let data = ResourceData::new(&obj, &included);

        assert_eq!(
            data.relationship::<Org>("org").unwrap_err().to_string(),
            "org.slug: missing attribute"
        );
        assert_eq!(
            data.relationship::<Org>("ghost").unwrap_err(),
            DecodeError::MissingRelationship("ghost".into())
        );
        assert_eq!(
            data.relationship::<Org>("absent").unwrap_err(),
            DecodeError::MissingRelationship("absent".into())
        );
        assert_eq!(
            data.relationship::<Org>("nothing").unwrap_err(),
            DecodeError::MissingRelationship("nothing".into())
        );
        assert!(matches!(
            data.relationship::<Org>("members").unwrap_err(),
            DecodeError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_optional_relationship() {
        let obj = resource(json!({
            "id": "c1",
            "type": "canvases",
            "relationships": {
                "nothing": {"data": null},
                "ghost": {"data": {"type": "orgs", "id": "missing"}}
            }
        }));
        let included = IncludedTable::new();
        let data = ResourceData::new(&obj, &included);

        assert_eq!(data.optional_relationship::<Org>("nothing").unwrap(), None);
        assert_eq!(data.optional_relationship::<Org>("absent").unwrap(), None);
        assert!(data.optional_relationship::<Org>("ghost").is_err());
    }

    #[test]
    fn test_to_many_relationship() {
        let obj = resource(json!({
            "id": "p1",
            "type": "projects",
            "relationships": {
                "orgs": {"data": [
                    {"type": "orgs", "id": "o2"},
                    {"type": "orgs", "id": "o1"}
                ]},
                "broken": {"data": [
                    {"type": "orgs", "id": "o1"},
                    {"type": "orgs", "id": "o3"}
                ]},
                "none": {"data": null}
            }
        }));
        let included = table(vec![
            json!({"id": "o1", "type": "orgs", "attributes": {"slug": "one"}}),
            json!({"id": "o2", "type": "orgs", "attributes": {"slug": "two"}}),
            json!({"id": "o3", "type": "orgs", "attributes": {}}),
        ]);
        let data = ResourceData::new(&obj, &included);

        let orgs: Vec<Org> = data.relationships("orgs").unwrap();
        let slugs: Vec<&str> = orgs.iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(slugs, ["two", "one"]);

        assert_eq!(
            data.relationships::<Org>("broken").unwrap_err().field(),
            "broken[1].slug"
        );
        assert!(data.relationships::<Org>("none").unwrap().is_empty());
        assert!(data.relationships::<Org>("absent").is_err());
    }

    #[test]
    fn test_included_lookup_is_keyed_by_type_and_id() {
        let obj = resource(json!({
            "id": "c1",
            "type": "canvases",
            "relationships": {"org": {"data": {"type": "orgs", "id": "1"}}}
        }));
        let included = table(vec![json!({
            "id": "1",
            "type": "projects",
            "attributes": {"slug": "wrong-type"}
        })]);
        let data = ResourceData::new(&obj, &included);

        assert_eq!(
            data.relationship::<Org>("org").unwrap_err(),
            DecodeError::MissingRelationship("org".into())
        );
        assert!(included.get(&ResourceIdentifier::new("projects", "1")).is_some());
    }
}
