use std::fmt;

use arrow_schema::{DataType, TimeUnit};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};


/// Kind of a single decoded source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Null,
    Boolean,
    Int32,
    Int64,
    Double,
    String,
    DateTime,
    ObjectId,
    Document,
    Array,
    Unsupported,
}

impl RawKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawKind::Null => "null",
            RawKind::Boolean => "bool",
            RawKind::Int32 => "int32",
            RawKind::Int64 => "int64",
            RawKind::Double => "double",
            RawKind::String => "string",
            RawKind::DateTime => "date",
            RawKind::ObjectId => "objectId",
            RawKind::Document => "object",
            RawKind::Array => "array",
            RawKind::Unsupported => "unsupported",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, RawKind::Document | RawKind::Array)
    }

    pub fn numeric(&self) -> Option<NumericKind> {
        match self {
            RawKind::Int32 => Some(NumericKind::Int32),
            RawKind::Int64 => Some(NumericKind::Int64),
            RawKind::Double => Some(NumericKind::Double),
            _ => None,
        }
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric widening lattice: `Int32 < Int64 < Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Int32,
    Int64,
    Double,
}

impl NumericKind {
    /// Least upper bound of two kinds.
    pub fn join(self, other: NumericKind) -> NumericKind {
        self.max(other)
    }

    /// Joins an optional accumulator with a newly observed kind.
    pub fn widen(current: Option<NumericKind>, observed: NumericKind) -> NumericKind {
        match current {
            Some(kind) => kind.join(observed),
            None => observed,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            NumericKind::Int32 => FieldType::NullableInt32,
            NumericKind::Int64 => FieldType::NullableInt64,
            NumericKind::Double => FieldType::NullableFloat64,
        }
    }
}

/// Settled kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Boolean,
    Int32,
    Int64,
    Double,
    String,
    DateTime,
    ObjectId,
    Composite,
    Unsupported,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Boolean => "boolean",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::Double => "double",
            ElementKind::String => "string",
            ElementKind::DateTime => "datetime",
            ElementKind::ObjectId => "objectId",
            ElementKind::Composite => "composite",
            ElementKind::Unsupported => "unsupported",
        }
    }

    /// Kind a column takes when created from its first non-null value.
    /// Returns `None` for null, which never establishes a column.
    pub fn from_raw(kind: RawKind) -> Option<ElementKind> {
        match kind {
            RawKind::Null => None,
            RawKind::Boolean => Some(ElementKind::Boolean),
            RawKind::Int32 => Some(ElementKind::Int32),
            RawKind::Int64 => Some(ElementKind::Int64),
            RawKind::Double => Some(ElementKind::Double),
            RawKind::String => Some(ElementKind::String),
            RawKind::DateTime => Some(ElementKind::DateTime),
            RawKind::ObjectId => Some(ElementKind::ObjectId),
            RawKind::Document | RawKind::Array => Some(ElementKind::Composite),
            RawKind::Unsupported => Some(ElementKind::Unsupported),
        }
    }

    pub fn numeric(&self) -> Option<NumericKind> {
        match self {
            ElementKind::Int32 => Some(NumericKind::Int32),
            ElementKind::Int64 => Some(NumericKind::Int64),
            ElementKind::Double => Some(NumericKind::Double),
            _ => None,
        }
    }
}

impl From<NumericKind> for ElementKind {
    fn from(value: NumericKind) -> Self {
        match value {
            NumericKind::Int32 => ElementKind::Int32,
            NumericKind::Int64 => ElementKind::Int64,
            NumericKind::Double => ElementKind::Double,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nullable element type of an output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    NullableBool,
    NullableInt32,
    NullableInt64,
    NullableFloat64,
    NullableString,
    NullableTime,
    NullableJson,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::NullableBool => "bool",
            FieldType::NullableInt32 => "int32",
            FieldType::NullableInt64 => "int64",
            FieldType::NullableFloat64 => "float64",
            FieldType::NullableString => "string",
            FieldType::NullableTime => "time",
            FieldType::NullableJson => "json",
        }
    }

    pub fn to_arrow_data_type(&self) -> DataType {
        match self {
            FieldType::NullableBool => DataType::Boolean,
            FieldType::NullableInt32 => DataType::Int32,
            FieldType::NullableInt64 => DataType::Int64,
            FieldType::NullableFloat64 => DataType::Float64,
            FieldType::NullableTime => DataType::Timestamp(TimeUnit::Millisecond, None),
            FieldType::NullableString | FieldType::NullableJson => DataType::Utf8,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldType> for DataType {
    fn from(value: FieldType) -> Self {
        value.to_arrow_data_type()
    }
}

/// One cell read back out of a frame field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    /// Milliseconds since the Unix epoch, UTC.
    Time(i64),
    Utf8(String),
    /// Serialized extended JSON text.
    Json(String),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Utf8(s) | ScalarValue::Json(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            ScalarValue::Null => JsonValue::Null,
            ScalarValue::Boolean(b) => JsonValue::Bool(*b),
            ScalarValue::Int32(i) => JsonValue::Number(Number::from(*i)),
            ScalarValue::Int64(i) => JsonValue::Number(Number::from(*i)),
            ScalarValue::Float64(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ScalarValue::Time(ts) => JsonValue::Number(Number::from(*ts)),
            ScalarValue::Utf8(s) => JsonValue::String(s.clone()),
            // Stored text came from our own serializer; fall back to a string if it does not parse.
            ScalarValue::Json(s) => {
                serde_json::from_str(s).unwrap_or_else(|_| JsonValue::String(s.clone()))
            }
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Null => serializer.serialize_unit(),
            ScalarValue::Boolean(b) => serializer.serialize_bool(*b),
            ScalarValue::Int32(i) => serializer.serialize_i32(*i),
            ScalarValue::Int64(i) => serializer.serialize_i64(*i),
            ScalarValue::Float64(f) => serializer.serialize_f64(*f),
            ScalarValue::Time(ts) => serializer.serialize_i64(*ts),
            ScalarValue::Utf8(s) => serializer.serialize_str(s),
            ScalarValue::Json(_) => self.to_json().serialize(serializer),
        }
    }
}
