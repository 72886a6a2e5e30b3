use crate::engine::types::{FieldType, ScalarValue};

/// Nullable storage for one field, one vector variant per element type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    Bool(Vec<Option<bool>>),
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    String(Vec<Option<String>>),
    /// Milliseconds since the Unix epoch, UTC.
    Time(Vec<Option<i64>>),
    /// Extended JSON text of structured values.
    Json(Vec<Option<String>>),
}

impl FieldValues {
    /// `len` nulls of the given type.
    pub fn nulls(field_type: FieldType, len: usize) -> Self {
        match field_type {
            FieldType::NullableBool => FieldValues::Bool(vec![None; len]),
            FieldType::NullableInt32 => FieldValues::Int32(vec![None; len]),
            FieldType::NullableInt64 => FieldValues::Int64(vec![None; len]),
            FieldType::NullableFloat64 => FieldValues::Float64(vec![None; len]),
            FieldType::NullableString => FieldValues::String(vec![None; len]),
            FieldType::NullableTime => FieldValues::Time(vec![None; len]),
            FieldType::NullableJson => FieldValues::Json(vec![None; len]),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValues::Bool(_) => FieldType::NullableBool,
            FieldValues::Int32(_) => FieldType::NullableInt32,
            FieldValues::Int64(_) => FieldType::NullableInt64,
            FieldValues::Float64(_) => FieldType::NullableFloat64,
            FieldValues::String(_) => FieldType::NullableString,
            FieldValues::Time(_) => FieldType::NullableTime,
            FieldValues::Json(_) => FieldType::NullableJson,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldValues::Bool(v) => v.len(),
            FieldValues::Int32(v) => v.len(),
            FieldValues::Int64(v) | FieldValues::Time(v) => v.len(),
            FieldValues::Float64(v) => v.len(),
            FieldValues::String(v) | FieldValues::Json(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self, index: usize) -> bool {
        match self {
            FieldValues::Bool(v) => v.get(index).is_none_or(Option::is_none),
            FieldValues::Int32(v) => v.get(index).is_none_or(Option::is_none),
            FieldValues::Int64(v) | FieldValues::Time(v) => {
                v.get(index).is_none_or(Option::is_none)
            }
            FieldValues::Float64(v) => v.get(index).is_none_or(Option::is_none),
            FieldValues::String(v) | FieldValues::Json(v) => {
                v.get(index).is_none_or(Option::is_none)
            }
        }
    }

    pub fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }

    /// Cell at `index`, `None` when out of range.
    pub fn value_at(&self, index: usize) -> Option<ScalarValue> {
        if index >= self.len() {
            return None;
        }
        let value = match self {
            FieldValues::Bool(v) => v[index].map(ScalarValue::Boolean),
            FieldValues::Int32(v) => v[index].map(ScalarValue::Int32),
            FieldValues::Int64(v) => v[index].map(ScalarValue::Int64),
            FieldValues::Float64(v) => v[index].map(ScalarValue::Float64),
            FieldValues::String(v) => v[index].clone().map(ScalarValue::Utf8),
            FieldValues::Time(v) => v[index].map(ScalarValue::Time),
            FieldValues::Json(v) => v[index].clone().map(ScalarValue::Json),
        };
        Some(value.unwrap_or(ScalarValue::Null))
    }

    pub(crate) fn push_null(&mut self) {
        match self {
            FieldValues::Bool(v) => v.push(None),
            FieldValues::Int32(v) => v.push(None),
            FieldValues::Int64(v) | FieldValues::Time(v) => v.push(None),
            FieldValues::Float64(v) => v.push(None),
            FieldValues::String(v) | FieldValues::Json(v) => v.push(None),
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        match self {
            FieldValues::Bool(v) => v.truncate(len),
            FieldValues::Int32(v) => v.truncate(len),
            FieldValues::Int64(v) | FieldValues::Time(v) => v.truncate(len),
            FieldValues::Float64(v) => v.truncate(len),
            FieldValues::String(v) | FieldValues::Json(v) => v.truncate(len),
        }
    }
}

/// A named, typed, nullable column of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub values: FieldValues,
}

impl Field {
    pub fn new(name: impl Into<String>, values: FieldValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn field_type(&self) -> FieldType {
        self.values.field_type()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.values.is_null(index)
    }

    pub fn value_at(&self, index: usize) -> Option<ScalarValue> {
        self.values.value_at(index)
    }
}
