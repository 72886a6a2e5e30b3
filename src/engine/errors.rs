use std::io;
use thiserror::Error;
use tracing::{debug, error};

use crate::engine::types::{ElementKind, RawKind};

/// Errors that abort a transcoding call. No partial frame is ever returned alongside one.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("field \"{field}\" should have {expected} type, but got {actual}")]
    FieldTypeMismatch {
        field: String,
        expected: ElementKind,
        actual: RawKind,
    },

    #[error("field \"{field}\" already has a value in the open row")]
    DuplicateField { field: String },

    #[error("{reason}")]
    InvalidSeriesValue { reason: String },

    #[error("{reason}")]
    InvalidSeriesTimestamp { reason: String },

    #[error(transparent)]
    Cursor(#[from] CursorError),
}

impl TranscodeError {
    pub fn invalid_value() -> Self {
        TranscodeError::InvalidSeriesValue {
            reason: "value should be numeric".to_string(),
        }
    }

    pub fn invalid_timestamp() -> Self {
        TranscodeError::InvalidSeriesTimestamp {
            reason: "ts should be timestamp".to_string(),
        }
    }

    pub fn log_error(&self) {
        match self {
            TranscodeError::FieldTypeMismatch {
                field,
                expected,
                actual,
            } => {
                error!("Column type mismatch: {}", self);
                debug!(field = %field, expected = %expected, actual = %actual, "Mismatch details");
            }
            TranscodeError::DuplicateField { field } => {
                error!("Duplicate field rejected: {}", field);
            }
            TranscodeError::InvalidSeriesValue { reason } => {
                error!("Invalid series value: {}", reason);
            }
            TranscodeError::InvalidSeriesTimestamp { reason } => {
                error!("Invalid series timestamp: {}", reason);
            }
            TranscodeError::Cursor(e) => {
                error!("Cursor decode failed: {}", e);
                debug!("Cursor error details: {:?}", e);
            }
        }
    }
}

/// Failures raised while pulling the next document out of a cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: invalid extended JSON: {message}")]
    ExtJson { line: usize, message: String },

    #[error("line {line}: expected a document")]
    NotADocument { line: usize },
}
