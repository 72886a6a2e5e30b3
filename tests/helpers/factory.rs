pub use super::factories::{CursorFactory, DocumentFactory, SeriesRowFactory};

pub struct Factory;

impl Factory {
    pub fn document() -> DocumentFactory {
        DocumentFactory::new()
    }

    pub fn series_row() -> SeriesRowFactory {
        SeriesRowFactory::new()
    }

    pub fn cursor() -> CursorFactory {
        CursorFactory::new()
    }
}
