use bson::{Bson, Document};

pub struct DocumentFactory {
    doc: Document,
}

impl DocumentFactory {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(key, value.into());
        self
    }

    pub fn with_null(mut self, key: &str) -> Self {
        self.doc.insert(key, Bson::Null);
        self
    }

    pub fn create(self) -> Document {
        self.doc
    }

    /// Copies of the document, each tagged with its position under `index`.
    pub fn create_list(self, count: usize) -> Vec<Document> {
        (0..count)
            .map(|i| {
                let mut doc = self.doc.clone();
                doc.insert("index", i as i32);
                doc
            })
            .collect()
    }
}
