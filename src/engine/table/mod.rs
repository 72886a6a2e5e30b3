pub mod column_set;
pub mod stream;
pub mod transcoder;

pub use column_set::{ColumnSet, ID_FIELD};
pub use stream::StreamTable;
pub use transcoder::{TableTranscoder, transcode_table};

#[cfg(test)]
mod transcoder_test;
