use crate::engine::frame::field::Field;

/// Ordered, equal-length, named columns sharing one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Frame {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row count, taken from the first field.
    pub fn rows(&self) -> usize {
        self.fields.first().map(Field::len).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// True when every field has the same length.
    pub fn is_rectangular(&self) -> bool {
        let rows = self.rows();
        self.fields.iter().all(|f| f.len() == rows)
    }
}
