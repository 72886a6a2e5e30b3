use std::io::BufRead;

use bson::{Bson, Document};

use crate::engine::document::extjson;
use crate::engine::document::view::DocumentView;
use crate::engine::errors::CursorError;

/// Forward-only source of documents. The transcoders pull from it until
/// `advance` returns `false`; they never open, rewind or close it.
pub trait DocumentCursor {
    /// Moves to the next document. `Ok(false)` marks the end of the stream.
    fn advance(&mut self) -> Result<bool, CursorError>;

    /// The document the last successful `advance` moved to.
    fn current(&self) -> &DocumentView;
}

/// In-memory cursor over already decoded documents.
#[derive(Debug)]
pub struct DocumentsCursor {
    docs: std::vec::IntoIter<Document>,
    current: DocumentView,
}

impl DocumentsCursor {
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs: docs.into_iter(),
            current: DocumentView::default(),
        }
    }
}

impl From<Vec<Document>> for DocumentsCursor {
    fn from(docs: Vec<Document>) -> Self {
        DocumentsCursor::new(docs)
    }
}

impl DocumentCursor for DocumentsCursor {
    fn advance(&mut self) -> Result<bool, CursorError> {
        match self.docs.next() {
            Some(doc) => {
                self.current = DocumentView::from(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn current(&self) -> &DocumentView {
        &self.current
    }
}

/// Reads one extended JSON document per line. Blank lines are skipped.
pub struct ExtJsonLinesCursor<R: BufRead> {
    reader: R,
    line: usize,
    buf: String,
    current: DocumentView,
}

impl<R: BufRead> ExtJsonLinesCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
            current: DocumentView::default(),
        }
    }

    /// Number of physical lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> DocumentCursor for ExtJsonLinesCursor<R> {
    fn advance(&mut self) -> Result<bool, CursorError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(false);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }

            let line = self.line;
            let json = serde_json::from_str(text)
                .map_err(|source| CursorError::Json { line, source })?;
            let value = extjson::from_json(json)
                .map_err(|message| CursorError::ExtJson { line, message })?;

            return match value {
                Bson::Document(doc) => {
                    self.current = DocumentView::from(doc);
                    Ok(true)
                }
                _ => Err(CursorError::NotADocument { line }),
            };
        }
    }

    fn current(&self) -> &DocumentView {
        &self.current
    }
}
