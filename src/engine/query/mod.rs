pub mod dispatch;
pub mod options;

pub use dispatch::execute;
pub use options::{QueryMode, QueryOptions};

#[cfg(test)]
mod dispatch_test;
