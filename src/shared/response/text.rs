use crate::engine::frame::Frame;
use crate::engine::types::ScalarValue;
use crate::shared::response::render::{FrameRenderer, OutputFormat, RenderError};
use crate::shared::time::format_millis;

pub const DEFAULT_MAX_CELL_WIDTH: usize = 10;

/// Pipe-delimited table for terminals and debugging.
pub struct TextRenderer {
    max_cell_width: usize,
}

impl TextRenderer {
    pub fn new(max_cell_width: usize) -> Self {
        Self { max_cell_width }
    }

    fn cell(&self, value: &ScalarValue) -> String {
        match value {
            ScalarValue::Null => "null".to_string(),
            ScalarValue::Boolean(b) => b.to_string(),
            ScalarValue::Int32(i) => i.to_string(),
            ScalarValue::Int64(i) => i.to_string(),
            ScalarValue::Float64(f) => f.to_string(),
            ScalarValue::Time(ms) => format_millis(*ms),
            ScalarValue::Utf8(s) => self.truncate(s),
            ScalarValue::Json(s) => s.clone(),
        }
    }

    fn truncate(&self, s: &str) -> String {
        if s.chars().count() <= self.max_cell_width {
            return s.to_string();
        }
        let mut out: String = s.chars().take(self.max_cell_width).collect();
        out.push_str("...");
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELL_WIDTH)
    }
}

impl FrameRenderer for TextRenderer {
    fn render(&self, frames: &[Frame]) -> Result<Vec<u8>, RenderError> {
        let mut output = String::new();

        for (i, frame) in frames.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let rows = frame.rows();
            output.push_str(&format!("{} ({} rows)\n", frame.name(), rows));

            // Header line: name:type | name:type
            let header = frame
                .fields
                .iter()
                .map(|f| format!("{}:{}", f.name(), f.field_type()))
                .collect::<Vec<_>>()
                .join(" | ");
            output.push_str(&header);
            output.push('\n');

            for row in 0..rows {
                let line = frame
                    .fields
                    .iter()
                    .map(|f| self.cell(&f.value_at(row).unwrap_or(ScalarValue::Null)))
                    .collect::<Vec<_>>()
                    .join(" | ");
                output.push_str(&line);
                output.push('\n');
            }
        }

        Ok(output.into_bytes())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}
