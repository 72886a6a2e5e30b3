use serde::Serialize;

use crate::engine::frame::{Field, Frame};
use crate::engine::types::ScalarValue;
use crate::shared::response::render::{FrameRenderer, OutputFormat, RenderError};

/// One JSON object per frame, newline separated.
pub struct JsonRenderer;

#[derive(Serialize)]
struct FrameDoc<'a> {
    name: &'a str,
    fields: Vec<FieldRef<'a>>,
    rows: FrameRows<'a>,
}

#[derive(Serialize)]
struct FieldRef<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    field_type: &'static str,
}

// Serializes rows as an array of arrays straight from the field storage
struct FrameRows<'a> {
    fields: &'a [Field],
    rows: usize,
}

impl<'a> Serialize for FrameRows<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in 0..self.rows {
            let cells = self
                .fields
                .iter()
                .map(|f| f.value_at(row).unwrap_or(ScalarValue::Null))
                .collect::<Vec<_>>();
            seq.serialize_element(&cells)?;
        }
        seq.end()
    }
}

impl<'a> From<&'a Frame> for FrameDoc<'a> {
    fn from(frame: &'a Frame) -> Self {
        Self {
            name: frame.name(),
            fields: frame
                .fields
                .iter()
                .map(|f| FieldRef {
                    name: f.name(),
                    field_type: f.field_type().as_str(),
                })
                .collect(),
            rows: FrameRows {
                fields: &frame.fields,
                rows: frame.rows(),
            },
        }
    }
}

impl FrameRenderer for JsonRenderer {
    fn render(&self, frames: &[Frame]) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        for frame in frames {
            serde_json::to_writer(&mut buf, &FrameDoc::from(frame))?;
            buf.push(b'\n');
        }
        Ok(buf)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
