use std::io::Cursor;

use bson::{Bson, Document};

use crate::engine::document::{DocumentsCursor, ExtJsonLinesCursor};

pub struct CursorFactory {
    docs: Vec<Document>,
}

impl CursorFactory {
    pub fn new() -> Self {
        Self { docs: Vec::new() }
    }

    pub fn with_document(mut self, doc: Document) -> Self {
        self.docs.push(doc);
        self
    }

    pub fn with_documents(mut self, docs: impl IntoIterator<Item = Document>) -> Self {
        self.docs.extend(docs);
        self
    }

    pub fn create(self) -> DocumentsCursor {
        DocumentsCursor::new(self.docs)
    }

    /// Same documents, written out as canonical extended JSON lines.
    pub fn create_lines(self) -> ExtJsonLinesCursor<Cursor<Vec<u8>>> {
        let mut text = String::new();
        for doc in self.docs {
            text.push_str(&Bson::Document(doc).into_canonical_extjson().to_string());
            text.push('\n');
        }
        ExtJsonLinesCursor::new(Cursor::new(text.into_bytes()))
    }
}
