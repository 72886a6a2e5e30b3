pub mod group;
pub mod transcoder;

pub use group::{SeriesGroup, TIME_FIELD, VALUE_FIELD};
pub use transcoder::{SeriesPolicy, SeriesRow, SeriesTranscoder, decode_row, transcode_series};
