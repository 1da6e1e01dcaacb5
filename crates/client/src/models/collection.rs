//! The collection+json envelope CUBE wraps every response in.
//!
//! # What this module handles:
//! - Deserializing `{"collection": {"items": [{"data": [{name, value}]}]}}`
//! - Field lookup across items without assuming item order
//!
//! # Invariants
//! - `value` may be a JSON string or number depending on the field; scalar
//!   coercion is centralized in [`DataField::value_as_string`].

use serde::Deserialize;
use serde_json::Value;

/// Top-level response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub collection: Collection,
}

/// The collection body: items on success, an error message on failure.
#[derive(Debug, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub error: Option<CollectionError>,
}

/// Error block present on 4xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionError {
    #[serde(default)]
    pub message: String,
}

/// One item: a flat list of named data fields.
#[derive(Debug, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub data: Vec<DataField>,
}

/// A single `{name, value}` pair inside an item.
#[derive(Debug, Deserialize)]
pub struct DataField {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl DataField {
    /// The value as a string, coercing JSON numbers (CUBE serializes ids as
    /// numbers but titles and statuses as strings).
    pub fn value_as_string(&self) -> Option<String> {
        scalar_to_string(&self.value)
    }
}

impl Item {
    /// Look up a field by name within this item.
    pub fn field(&self, name: &str) -> Option<&DataField> {
        self.data.iter().find(|f| f.name == name)
    }
}

impl Envelope {
    /// The first occurrence of a named field across all items.
    pub fn first_field(&self, name: &str) -> Option<&DataField> {
        self.collection
            .items
            .iter()
            .find_map(|item| item.field(name))
    }

    /// The error message on a rejected request, if any.
    pub fn error_message(&self) -> &str {
        self.collection
            .error
            .as_ref()
            .map(|e| e.message.as_str())
            .unwrap_or_default()
    }
}

/// Render a scalar JSON value as a string; non-scalars yield `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
