//! Extended JSON helpers for composite values.
//!
//! Embedded documents and arrays are stored as canonical extended JSON so that
//! typed leaves (`{"$date": ...}`, `{"$oid": ...}`, `{"$numberInt": ...}`)
//! survive the trip through a string column. Read them back with [`decode`],
//! not with a plain JSON parser.

use bson::{Array, Bson, Document};
use serde_json::Value as JsonValue;

pub fn document_to_extjson(doc: &Document) -> String {
    Bson::Document(doc.clone())
        .into_canonical_extjson()
        .to_string()
}

pub fn array_to_extjson(arr: &Array) -> String {
    Bson::Array(arr.clone()).into_canonical_extjson().to_string()
}

/// Parses extended JSON text (canonical or relaxed) back into a typed value.
pub fn decode(text: &str) -> Result<Bson, String> {
    let json: JsonValue = serde_json::from_str(text).map_err(|e| e.to_string())?;
    from_json(json)
}

pub fn from_json(json: JsonValue) -> Result<Bson, String> {
    Bson::try_from(json).map_err(|e| e.to_string())
}
