pub mod cursor_factory;
pub mod document_factory;
pub mod series_row_factory;

pub use cursor_factory::CursorFactory;
pub use document_factory::DocumentFactory;
pub use series_row_factory::SeriesRowFactory;

#[cfg(test)]
mod cursor_factory_test;
#[cfg(test)]
mod document_factory_test;
#[cfg(test)]
mod series_row_factory_test;
