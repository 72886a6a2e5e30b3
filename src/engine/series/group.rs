use crate::engine::document::RawValue;
use crate::engine::frame::{Field, FieldValues, Frame};
use crate::engine::types::NumericKind;

pub const TIME_FIELD: &str = "time";
pub const VALUE_FIELD: &str = "Value";

/// Rows collected for one series name, in input order.
#[derive(Debug, Clone, Default)]
pub struct SeriesGroup {
    name: String,
    timestamps: Vec<Option<i64>>,
    raw_values: Vec<RawValue>,
    value_kind: Option<NumericKind>,
}

impl SeriesGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Widest numeric kind seen so far across the group.
    pub fn value_kind(&self) -> Option<NumericKind> {
        self.value_kind
    }

    /// Appends one row. `value` must be null or numeric.
    pub fn push(&mut self, ts: Option<i64>, value: RawValue) {
        if let Some(kind) = value.kind().numeric() {
            self.value_kind = Some(NumericKind::widen(self.value_kind, kind));
        }
        self.timestamps.push(ts);
        self.raw_values.push(value);
    }

    /// Projects every value into the group's final kind.
    ///
    /// Returns `None` when no row carried a numeric value.
    pub fn into_frame(self) -> Option<Frame> {
        let kind = self.value_kind?;
        let values = match kind {
            NumericKind::Int32 => {
                FieldValues::Int32(self.raw_values.iter().map(RawValue::as_i32).collect())
            }
            NumericKind::Int64 => {
                FieldValues::Int64(self.raw_values.iter().map(RawValue::to_i64).collect())
            }
            NumericKind::Double => {
                FieldValues::Float64(self.raw_values.iter().map(RawValue::to_f64).collect())
            }
        };

        Some(Frame::with_fields(
            self.name,
            vec![
                Field::new(TIME_FIELD, FieldValues::Time(self.timestamps)),
                Field::new(VALUE_FIELD, values),
            ],
        ))
    }
}
