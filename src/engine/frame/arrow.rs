use std::sync::Arc;

use arrow_array::builder::{
    BooleanBuilder, Float64Builder, Int32Builder, Int64Builder, StringBuilder,
    TimestampMillisecondBuilder,
};
use arrow_array::{ArrayRef, RecordBatch, RecordBatchOptions};
use arrow_schema::{ArrowError, Field as ArrowField, Schema};

use crate::engine::frame::data::Frame;
use crate::engine::frame::field::{Field, FieldValues};

type ArrowResult<T> = Result<T, ArrowError>;

/// Marks fields whose UTF-8 payload is extended JSON.
pub const JSON_EXTENSION_KEY: &str = "docframe.json";

impl Frame {
    pub fn arrow_schema(&self) -> Arc<Schema> {
        let fields = self.fields.iter().map(arrow_field).collect::<Vec<_>>();
        Arc::new(Schema::new(fields).with_metadata(
            [("name".to_string(), self.name.clone())].into_iter().collect(),
        ))
    }

    pub fn to_record_batch(&self) -> ArrowResult<RecordBatch> {
        let schema = self.arrow_schema();
        let columns = self.fields.iter().map(build_array).collect::<Vec<_>>();
        let options = RecordBatchOptions::new().with_row_count(Some(self.rows()));
        RecordBatch::try_new_with_options(schema, columns, &options)
    }
}

fn arrow_field(field: &Field) -> ArrowField {
    let arrow = ArrowField::new(&field.name, field.field_type().to_arrow_data_type(), true);
    match field.values {
        FieldValues::Json(_) => arrow.with_metadata(
            [(JSON_EXTENSION_KEY.to_string(), "true".to_string())]
                .into_iter()
                .collect(),
        ),
        _ => arrow,
    }
}

fn build_array(field: &Field) -> ArrayRef {
    match &field.values {
        FieldValues::Bool(values) => {
            let mut b = BooleanBuilder::with_capacity(values.len());
            for v in values {
                b.append_option(*v);
            }
            Arc::new(b.finish()) as ArrayRef
        }
        FieldValues::Int32(values) => {
            let mut b = Int32Builder::with_capacity(values.len());
            for v in values {
                b.append_option(*v);
            }
            Arc::new(b.finish()) as ArrayRef
        }
        FieldValues::Int64(values) => {
            let mut b = Int64Builder::with_capacity(values.len());
            for v in values {
                b.append_option(*v);
            }
            Arc::new(b.finish()) as ArrayRef
        }
        FieldValues::Float64(values) => {
            let mut b = Float64Builder::with_capacity(values.len());
            for v in values {
                b.append_option(*v);
            }
            Arc::new(b.finish()) as ArrayRef
        }
        FieldValues::Time(values) => {
            let mut b = TimestampMillisecondBuilder::with_capacity(values.len());
            for v in values {
                b.append_option(*v);
            }
            Arc::new(b.finish()) as ArrayRef
        }
        FieldValues::String(values) | FieldValues::Json(values) => {
            let data_len = values.iter().flatten().map(String::len).sum();
            let mut b = StringBuilder::with_capacity(values.len(), data_len);
            for v in values {
                b.append_option(v.as_deref());
            }
            Arc::new(b.finish()) as ArrayRef
        }
    }
}
