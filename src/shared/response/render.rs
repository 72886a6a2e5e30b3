use std::fmt;
use std::str::FromStr;

use arrow_schema::ArrowError;
use serde::Deserialize;
use thiserror::Error;

use crate::engine::frame::Frame;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("arrow encoding failed: {0}")]
    Arrow(#[from] ArrowError),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Arrow,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "arrow" => Ok(OutputFormat::Arrow),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Arrow => f.write_str("arrow"),
        }
    }
}

/// Serializes transcoded frames for a consumer.
pub trait FrameRenderer: Send + Sync {
    fn render(&self, frames: &[Frame]) -> Result<Vec<u8>, RenderError>;

    fn format(&self) -> OutputFormat;
}
