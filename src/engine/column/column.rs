use std::collections::HashMap;

use tracing::{debug, warn};

use crate::engine::document::RawValue;
use crate::engine::errors::TranscodeError;
use crate::engine::frame::{Field, FieldValues};
use crate::engine::types::{ElementKind, FieldType, NumericKind, RawKind};

/// Placeholder stored for values of kinds the table model does not carry.
pub const UNSUPPORTED_MARKER: &str = "[Unsupported type]";

/// A named, nullable table column whose element kind is discovered from the
/// data and widened along `int32 -> int64 -> double` as values arrive.
///
/// Embedded documents and arrays share one composite kind. They are held as
/// extended JSON strings until [`Column::rectify`] retypes the storage.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    kind: ElementKind,
    values: FieldValues,
    observed: HashMap<RawKind, usize>,
    null_count: usize,
    created_at: usize,
}

impl Column {
    /// Creates a column from the first non-null value seen for `key` at
    /// `row_index`. Earlier rows are backfilled with null.
    ///
    /// Returns `None` for a null value.
    pub fn from_first_value(row_index: usize, key: &str, value: &RawValue) -> Option<Self> {
        let kind = ElementKind::from_raw(value.kind())?;
        if kind == ElementKind::Unsupported {
            warn!(field = %key, source_type = ?value, "Unsupported value type, storing marker");
        }

        let mut column = Self {
            name: key.to_string(),
            kind,
            values: FieldValues::nulls(storage_type(kind), row_index),
            observed: HashMap::new(),
            null_count: row_index,
            created_at: row_index,
        };
        column.store(value);
        Some(column)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Row index at which the column was created.
    pub fn created_at(&self) -> usize {
        self.created_at
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn null_count(&self) -> usize {
        self.null_count
    }

    /// How many appended source values had `kind`.
    pub fn observed(&self, kind: RawKind) -> usize {
        self.observed.get(&kind).copied().unwrap_or(0)
    }

    /// Appends one value, widening the column first when a wider numeric
    /// kind arrives. Fails without touching storage on an incompatible kind.
    pub fn append(&mut self, value: &RawValue) -> Result<(), TranscodeError> {
        let raw = value.kind();
        if raw == RawKind::Null {
            self.record(raw);
            self.pad_null();
            return Ok(());
        }

        if let (Some(current), Some(incoming)) = (self.kind.numeric(), raw.numeric()) {
            let target = current.join(incoming);
            if target != current {
                self.widen(target);
            }
            self.store(value);
            return Ok(());
        }

        if !self.accepts(raw) {
            return Err(TranscodeError::FieldTypeMismatch {
                field: self.name.clone(),
                expected: self.kind,
                actual: raw,
            });
        }

        self.store(value);
        Ok(())
    }

    /// Appends a null for a row that lacked this field. Not counted as an observation.
    pub fn pad_null(&mut self) {
        self.values.push_null();
        self.null_count += 1;
    }

    /// Drops rows past `len`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.values.len() {
            self.values.truncate(len);
            self.null_count = self.values.null_count();
        }
    }

    /// Retypes composite storage as JSON once every observation was a
    /// document, an array or null.
    pub fn rectify(&mut self) {
        let composite_only = self.observed.keys().all(|kind| {
            matches!(kind, RawKind::Document | RawKind::Array | RawKind::Null)
        });
        let saw_composite = self.observed(RawKind::Document) + self.observed(RawKind::Array) > 0;
        if !(composite_only && saw_composite) {
            return;
        }

        let values = std::mem::replace(&mut self.values, FieldValues::Json(Vec::new()));
        self.values = match values {
            FieldValues::String(v) => FieldValues::Json(v),
            other => other,
        };
        debug!(field = %self.name, rows = self.values.len(), "Column rectified to JSON");
    }

    pub fn into_field(self) -> Field {
        Field::new(self.name, self.values)
    }

    /// Unsupported values degrade to the marker in any string-backed column,
    /// and a column created from one takes plain strings as well.
    fn accepts(&self, raw: RawKind) -> bool {
        if raw == RawKind::Unsupported {
            return storage_type(self.kind) == FieldType::NullableString;
        }
        match self.kind {
            ElementKind::Boolean => raw == RawKind::Boolean,
            ElementKind::String => raw == RawKind::String,
            ElementKind::DateTime => raw == RawKind::DateTime,
            ElementKind::ObjectId => raw == RawKind::ObjectId,
            ElementKind::Composite => raw.is_composite(),
            ElementKind::Unsupported => raw == RawKind::String,
            ElementKind::Int32 | ElementKind::Int64 | ElementKind::Double => raw.numeric().is_some(),
        }
    }

    /// Rewrites the whole storage buffer into the wider numeric type.
    fn widen(&mut self, target: NumericKind) {
        let values = std::mem::replace(&mut self.values, FieldValues::Int32(Vec::new()));
        self.values = match (values, target) {
            (FieldValues::Int32(v), NumericKind::Int64) => {
                FieldValues::Int64(v.into_iter().map(|x| x.map(i64::from)).collect())
            }
            (FieldValues::Int32(v), NumericKind::Double) => {
                FieldValues::Float64(v.into_iter().map(|x| x.map(f64::from)).collect())
            }
            (FieldValues::Int64(v), NumericKind::Double) => {
                FieldValues::Float64(v.into_iter().map(|x| x.map(|i| i as f64)).collect())
            }
            (other, _) => other,
        };
        debug!(
            field = %self.name,
            from = %self.kind,
            to = %ElementKind::from(target),
            rows = self.values.len(),
            "Column widened"
        );
        self.kind = ElementKind::from(target);
    }

    /// Pushes a value already known to fit the current storage.
    fn store(&mut self, value: &RawValue) {
        self.record(value.kind());
        match (&mut self.values, value) {
            (FieldValues::Bool(v), RawValue::Boolean(b)) => v.push(Some(*b)),
            (FieldValues::Int32(v), _) => v.push(value.as_i32()),
            (FieldValues::Int64(v), _) => v.push(value.to_i64()),
            (FieldValues::Float64(v), _) => v.push(value.to_f64()),
            (FieldValues::Time(v), RawValue::DateTime(ms)) => v.push(Some(*ms)),
            (FieldValues::String(v), RawValue::String(s) | RawValue::ObjectId(s)) => {
                v.push(Some(s.clone()))
            }
            (FieldValues::String(v), RawValue::Unsupported(_)) => {
                v.push(Some(UNSUPPORTED_MARKER.to_string()))
            }
            (FieldValues::String(v) | FieldValues::Json(v), RawValue::Document(_) | RawValue::Array(_)) => {
                v.push(value.to_extjson())
            }
            (values, _) => {
                debug_assert!(
                    false,
                    "{} storage cannot hold a {} value",
                    values.field_type(),
                    value.kind()
                );
                warn!(
                    field = %self.name,
                    actual = %value.kind(),
                    "Value does not fit column storage, stored as null"
                );
                values.push_null();
                self.null_count += 1;
            }
        }
    }

    fn record(&mut self, kind: RawKind) {
        *self.observed.entry(kind).or_insert(0) += 1;
    }
}

fn storage_type(kind: ElementKind) -> FieldType {
    match kind {
        ElementKind::Boolean => FieldType::NullableBool,
        ElementKind::Int32 => FieldType::NullableInt32,
        ElementKind::Int64 => FieldType::NullableInt64,
        ElementKind::Double => FieldType::NullableFloat64,
        ElementKind::DateTime => FieldType::NullableTime,
        ElementKind::String
        | ElementKind::ObjectId
        | ElementKind::Composite
        | ElementKind::Unsupported => FieldType::NullableString,
    }
}
