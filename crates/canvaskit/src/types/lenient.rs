//! Forgiving deserializers for optional dictionary fields
//!
//! A value that is missing, null, not a string, or does not parse becomes
//! `None` instead of failing the whole record, matching how the resource
//! decoders treat the same attributes.

use serde::{Deserialize, Deserializer};
use url::Url;

use super::Color;
use crate::json::JsonValue;

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::String(text)) => Some(text),
        _ => None,
    })
}

/// `Option<Color>` from a hex string, `None` when unparseable.
pub(crate) fn color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Color>, D::Error> {
    Ok(optional_text(deserializer)?.and_then(|hex| Color::from_hex(&hex)))
}

/// `Option<Url>` from an absolute URL string, `None` when unparseable.
pub(crate) fn url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Url>, D::Error> {
    Ok(optional_text(deserializer)?.and_then(|text| Url::parse(&text).ok()))
}
