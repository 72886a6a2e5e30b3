pub mod arrow;
pub mod data;
pub mod field;

pub use data::Frame;
pub use field::{Field, FieldValues};

#[cfg(test)]
mod data_test;
