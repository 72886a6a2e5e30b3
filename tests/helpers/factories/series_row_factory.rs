use bson::{Bson, DateTime, Document};
use rand::Rng;

/// Builds `{name, ts, value}` rows for the time-series transcoder.
pub struct SeriesRowFactory {
    name: Option<Bson>,
    ts: Option<Bson>,
    value: Option<Bson>,
}

impl SeriesRowFactory {
    pub fn new() -> Self {
        Self {
            name: None,
            ts: Some(Bson::DateTime(DateTime::from_millis(1_700_000_000_000))),
            value: Some(Bson::Int32(1)),
        }
    }

    pub fn with_name(mut self, name: impl Into<Bson>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_ts_millis(mut self, millis: i64) -> Self {
        self.ts = Some(Bson::DateTime(DateTime::from_millis(millis)));
        self
    }

    pub fn with_ts(mut self, ts: impl Into<Bson>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    pub fn without_ts(mut self) -> Self {
        self.ts = None;
        self
    }

    pub fn with_value(mut self, value: impl Into<Bson>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn without_value(mut self) -> Self {
        self.value = None;
        self
    }

    pub fn create(self) -> Document {
        let mut doc = Document::new();
        if let Some(name) = self.name {
            doc.insert("name", name);
        }
        if let Some(ts) = self.ts {
            doc.insert("ts", ts);
        }
        if let Some(value) = self.value {
            doc.insert("value", value);
        }
        doc
    }

    /// Rows one second apart with random int32 values.
    pub fn create_list(self, count: usize) -> Vec<Document> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|i| {
                let mut doc = Document::new();
                if let Some(name) = &self.name {
                    doc.insert("name", name.clone());
                }
                doc.insert(
                    "ts",
                    DateTime::from_millis(1_700_000_000_000 + (i as i64) * 1000),
                );
                doc.insert("value", rng.gen_range(0..1000_i32));
                doc
            })
            .collect()
    }
}
