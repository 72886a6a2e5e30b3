pub mod column;
pub mod document;
pub mod errors;
pub mod frame;
pub mod query;
pub mod series;
pub mod table;
pub mod types;

pub use errors::*;
