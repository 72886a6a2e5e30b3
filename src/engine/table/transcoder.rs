use tracing::debug;

use crate::engine::document::DocumentCursor;
use crate::engine::errors::TranscodeError;
use crate::engine::frame::Frame;
use crate::engine::table::column_set::ColumnSet;

/// One-shot table builder. Holds only the frame name, so one value can serve
/// any number of cursors.
#[derive(Debug, Clone)]
pub struct TableTranscoder {
    frame_name: String,
}

impl TableTranscoder {
    pub fn new(frame_name: impl Into<String>) -> Self {
        Self {
            frame_name: frame_name.into(),
        }
    }

    pub fn frame_name(&self) -> &str {
        &self.frame_name
    }

    /// Drains `cursor` into one rectangular frame. Any mismatch or decode
    /// failure aborts the call.
    pub fn transcode<C>(&self, cursor: &mut C) -> Result<Frame, TranscodeError>
    where
        C: DocumentCursor + ?Sized,
    {
        let mut set = ColumnSet::new();
        while cursor.advance()? {
            set.add_document(cursor.current())?;
        }

        let rows = set.rows();
        for column in set.columns() {
            debug!(
                target: "docframe::table",
                field = %column.name(),
                kind = %column.kind(),
                nulls = column.null_count(),
                "Column settled"
            );
        }

        let frame = set.into_frame(&self.frame_name);
        debug!(
            target: "docframe::table",
            frame = %self.frame_name,
            rows,
            fields = frame.len(),
            "Table transcoded"
        );
        Ok(frame)
    }
}

impl Default for TableTranscoder {
    fn default() -> Self {
        Self::new("Table")
    }
}

/// Shorthand for `TableTranscoder::new(frame_name).transcode(cursor)`.
pub fn transcode_table<C>(cursor: &mut C, frame_name: &str) -> Result<Frame, TranscodeError>
where
    C: DocumentCursor + ?Sized,
{
    TableTranscoder::new(frame_name).transcode(cursor)
}
