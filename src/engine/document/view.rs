use bson::Document;

use crate::engine::document::value::RawValue;

/// Ordered, decoded fields of one document. Nested values stay whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentView {
    fields: Vec<(String, RawValue)>,
}

impl DocumentView {
    pub fn new(fields: Vec<(String, RawValue)>) -> Self {
        Self { fields }
    }

    pub fn from_document(doc: &Document) -> Self {
        let fields = doc
            .iter()
            .map(|(key, value)| (key.clone(), RawValue::from(value)))
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, RawValue)] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// First value stored under `key`.
    pub fn lookup(&self, key: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&Document> for DocumentView {
    fn from(doc: &Document) -> Self {
        DocumentView::from_document(doc)
    }
}

impl From<Document> for DocumentView {
    fn from(doc: Document) -> Self {
        let fields = doc
            .into_iter()
            .map(|(key, value)| (key, RawValue::from(value)))
            .collect();
        Self { fields }
    }
}
