pub mod arrow;
pub mod json;
pub mod render;
pub mod text;

pub use render::{FrameRenderer, OutputFormat, RenderError};

pub use arrow::ArrowRenderer;
pub use arrow::ArrowStreamEncoder;
pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Renderer for `format`. `max_cell_width` only applies to text output.
pub fn renderer_for(format: OutputFormat, max_cell_width: usize) -> Box<dyn FrameRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(max_cell_width)),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Arrow => Box::new(ArrowRenderer),
    }
}

#[cfg(test)]
mod arrow_test;
