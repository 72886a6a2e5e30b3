use indexmap::IndexMap;
use tracing::debug;

use crate::engine::column::Column;
use crate::engine::document::{DocumentView, RawValue};
use crate::engine::errors::TranscodeError;
use crate::engine::frame::Frame;

/// Column name that is always emitted first when present.
pub const ID_FIELD: &str = "_id";

/// Columns keyed by field name in first-seen order, plus the committed row count.
///
/// Rows are built in two steps: values are added for the open row, then
/// [`ColumnSet::commit_row`] pads every column that missed it.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: IndexMap<String, Column>,
    rows: usize,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Adds one value to the open row.
    ///
    /// A key that already holds a value in the open row is rejected with
    /// [`TranscodeError::DuplicateField`] and the stored value is kept.
    pub fn add_value(&mut self, key: &str, value: &RawValue) -> Result<(), TranscodeError> {
        match self.columns.get_mut(key) {
            Some(column) => {
                if column.size() > self.rows {
                    return Err(TranscodeError::DuplicateField {
                        field: key.to_string(),
                    });
                }
                column.append(value)
            }
            None => {
                if let Some(column) = Column::from_first_value(self.rows, key, value) {
                    self.columns.insert(key.to_string(), column);
                }
                Ok(())
            }
        }
    }

    /// Adds every field of `doc` and commits the row. A key repeated within
    /// the document keeps its first value.
    pub fn add_document(&mut self, doc: &DocumentView) -> Result<(), TranscodeError> {
        for (key, value) in doc.iter() {
            match self.add_value(key, value) {
                Err(TranscodeError::DuplicateField { field }) => {
                    debug!(
                        target: "docframe::table",
                        field = %field,
                        row = self.rows,
                        "Duplicate key in document, keeping first value"
                    );
                }
                other => other?,
            }
        }
        self.commit_row();
        Ok(())
    }

    /// Pads columns that missed the open row and closes it.
    pub fn commit_row(&mut self) {
        let expected = self.rows + 1;
        for column in self.columns.values_mut() {
            if column.size() < expected {
                column.pad_null();
            }
        }
        self.rows = expected;
    }

    /// Discards whatever was added to the open row.
    pub fn rollback_row(&mut self) {
        let rows = self.rows;
        self.columns.retain(|_, column| column.created_at() < rows);
        for column in self.columns.values_mut() {
            column.truncate(rows);
        }
    }

    /// Rectifies every column and assembles the frame, `_id` first.
    pub fn into_frame(mut self, name: &str) -> Frame {
        let mut frame = Frame::new(name);
        if let Some(mut id) = self.columns.shift_remove(ID_FIELD) {
            id.rectify();
            frame.push_field(id.into_field());
        }
        for (_, mut column) in self.columns {
            column.rectify();
            frame.push_field(column.into_field());
        }
        frame
    }

    /// Frame of the committed rows, leaving `self` untouched.
    pub fn snapshot(&self, name: &str) -> Frame {
        let mut copy = self.clone();
        copy.rollback_row();
        copy.into_frame(name)
    }
}
