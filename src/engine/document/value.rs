use bson::{Array, Bson, Document};

use crate::engine::document::extjson;
use crate::engine::types::RawKind;

/// A single decoded document field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    /// Milliseconds since the Unix epoch.
    DateTime(i64),
    /// 24-character hex form.
    ObjectId(String),
    Document(Document),
    Array(Array),
    /// Source type name of a value kind the transcoders do not model.
    Unsupported(String),
}

impl RawValue {
    pub fn kind(&self) -> RawKind {
        match self {
            RawValue::Null => RawKind::Null,
            RawValue::Boolean(_) => RawKind::Boolean,
            RawValue::Int32(_) => RawKind::Int32,
            RawValue::Int64(_) => RawKind::Int64,
            RawValue::Double(_) => RawKind::Double,
            RawValue::String(_) => RawKind::String,
            RawValue::DateTime(_) => RawKind::DateTime,
            RawValue::ObjectId(_) => RawKind::ObjectId,
            RawValue::Document(_) => RawKind::Document,
            RawValue::Array(_) => RawKind::Array,
            RawValue::Unsupported(_) => RawKind::Unsupported,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            RawValue::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer value widened to 64 bits. Doubles are never narrowed.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            RawValue::Int32(i) => Some(*i as i64),
            RawValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            RawValue::Int32(i) => Some(*i as f64),
            RawValue::Int64(i) => Some(*i as f64),
            RawValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Canonical extended JSON for embedded documents and arrays, `None` otherwise.
    pub fn to_extjson(&self) -> Option<String> {
        match self {
            RawValue::Document(doc) => Some(extjson::document_to_extjson(doc)),
            RawValue::Array(arr) => Some(extjson::array_to_extjson(arr)),
            _ => None,
        }
    }
}

impl From<&Bson> for RawValue {
    fn from(value: &Bson) -> Self {
        match value {
            Bson::Null => RawValue::Null,
            Bson::Boolean(b) => RawValue::Boolean(*b),
            Bson::Int32(i) => RawValue::Int32(*i),
            Bson::Int64(i) => RawValue::Int64(*i),
            Bson::Double(f) => RawValue::Double(*f),
            Bson::String(s) => RawValue::String(s.clone()),
            Bson::DateTime(dt) => RawValue::DateTime(dt.timestamp_millis()),
            Bson::ObjectId(oid) => RawValue::ObjectId(oid.to_hex()),
            Bson::Document(doc) => RawValue::Document(doc.clone()),
            Bson::Array(arr) => RawValue::Array(arr.clone()),
            other => RawValue::Unsupported(unsupported_type_name(other).to_string()),
        }
    }
}

impl From<Bson> for RawValue {
    fn from(value: Bson) -> Self {
        match value {
            Bson::String(s) => RawValue::String(s),
            Bson::Document(doc) => RawValue::Document(doc),
            Bson::Array(arr) => RawValue::Array(arr),
            other => RawValue::from(&other),
        }
    }
}

fn unsupported_type_name(value: &Bson) -> &'static str {
    match value {
        Bson::Timestamp(_) => "timestamp",
        Bson::Binary(_) => "binData",
        Bson::RegularExpression(_) => "regex",
        Bson::JavaScriptCode(_) => "javascript",
        Bson::JavaScriptCodeWithScope(_) => "javascriptWithScope",
        Bson::Symbol(_) => "symbol",
        Bson::Decimal128(_) => "decimal128",
        Bson::Undefined => "undefined",
        Bson::MaxKey => "maxKey",
        Bson::MinKey => "minKey",
        Bson::DbPointer(_) => "dbPointer",
        _ => "unknown",
    }
}
