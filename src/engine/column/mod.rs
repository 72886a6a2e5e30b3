pub mod column;

pub use column::{Column, UNSUPPORTED_MARKER};
