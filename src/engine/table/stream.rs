use parking_lot::Mutex;

use crate::engine::document::{DocumentView, RawValue};
use crate::engine::errors::TranscodeError;
use crate::engine::frame::Frame;
use crate::engine::table::column_set::ColumnSet;

/// Table builder shared between producers.
///
/// Every operation runs under one lock, so the read-or-create-then-append
/// sequence for a field is never interleaved. Values from concurrent
/// producers land in whatever order they acquire the lock.
#[derive(Debug)]
pub struct StreamTable {
    name: String,
    inner: Mutex<ColumnSet>,
}

impl StreamTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(ColumnSet::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a value to the open row.
    ///
    /// Fails with [`TranscodeError::DuplicateField`] when another producer
    /// already set `key` for this row. The earlier value stays and the row
    /// is still open, so the caller can commit and retry.
    pub fn add_value(&self, key: &str, value: RawValue) -> Result<(), TranscodeError> {
        self.inner.lock().add_value(key, &value)
    }

    /// Pads the open row and starts the next one.
    pub fn commit_row(&self) {
        self.inner.lock().commit_row();
    }

    /// Adds a whole document as one row. On failure the row is discarded.
    pub fn add_document(&self, doc: &DocumentView) -> Result<(), TranscodeError> {
        let mut set = self.inner.lock();
        let result = set.add_document(doc);
        if result.is_err() {
            set.rollback_row();
        }
        result
    }

    /// Committed rows.
    pub fn rows(&self) -> usize {
        self.inner.lock().rows()
    }

    /// Rectified frame of the committed rows. The builder keeps accepting values.
    pub fn snapshot(&self) -> Frame {
        self.inner.lock().snapshot(&self.name)
    }

    /// Consumes the builder, discarding any uncommitted values.
    pub fn into_frame(self) -> Frame {
        let mut set = self.inner.into_inner();
        set.rollback_row();
        set.into_frame(&self.name)
    }
}
