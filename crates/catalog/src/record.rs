//! Raw directory records and typed field access.
//!
//! Directory exports are arrays of `{ "id": ..., "fields": { ... } }`
//! objects in which field names are the content service's human-edited
//! column labels. Column labels have drifted over time ("Recipe Name" vs
//! "Name", "Intro" vs "Introduction"), so every accessor takes a fallback
//! chain and returns the first usable value; a missing field maps to an
//! empty value rather than an error.

use serde::Deserialize;
use serde_json::{Map, Value};
use shamba_core::RecordId;

/// An image attachment on a directory record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    /// Attachment identifier.
    #[serde(default)]
    pub id: String,
    /// Public URL.
    pub url: String,
    /// Original filename.
    #[serde(default)]
    pub filename: String,
    /// Width in pixels, if known.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels, if known.
    #[serde(default)]
    pub height: Option<u32>,
}

/// A raw record: identifier plus the unparsed field map.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Record identifier assigned by the content service.
    pub id: RecordId,
    /// Field values keyed by column label.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// First non-empty string value among the named fields.
    ///
    /// Returns an empty string if none of the fields hold one.
    #[must_use]
    pub fn text(&self, names: &[&str]) -> String {
        names
            .iter()
            .filter_map(|name| self.fields.get(*name))
            .filter_map(Value::as_str)
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// String list value of the named field, empty if absent.
    #[must_use]
    pub fn text_list(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Boolean value of the named field, `false` if absent.
    #[must_use]
    pub fn boolean(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Attachment list of the named field, empty if absent or malformed.
    #[must_use]
    pub fn attachments(&self, name: &str) -> Vec<Attachment> {
        self.fields
            .get(name)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}
