use tracing::{debug, info};

use crate::engine::document::DocumentCursor;
use crate::engine::errors::TranscodeError;
use crate::engine::frame::Frame;
use crate::engine::query::options::{QueryMode, QueryOptions};
use crate::engine::series::SeriesTranscoder;
use crate::engine::table::TableTranscoder;

/// Runs exactly one transcoder over `cursor` and returns its frames.
///
/// Table mode yields one frame. Time-series mode yields one frame per series
/// in first-seen order. Failures are logged and returned as-is; nothing
/// produced before the failure is kept.
pub fn execute<C>(cursor: &mut C, options: &QueryOptions) -> Result<Vec<Frame>, TranscodeError>
where
    C: DocumentCursor + ?Sized,
{
    debug!(
        target: "docframe::query",
        mode = %options.mode,
        frame = %options.frame_name,
        policy = %options.series_policy,
        "Executing query"
    );

    let result = match options.mode {
        QueryMode::Table => TableTranscoder::new(options.frame_name.as_str())
            .transcode(cursor)
            .map(|frame| vec![frame]),
        QueryMode::TimeSeries => SeriesTranscoder::new(options.series_policy)
            .transcode(cursor)
            .map(|frames| frames.into_values().collect()),
    };

    match result {
        Ok(frames) => {
            info!(
                target: "docframe::query",
                mode = %options.mode,
                frames = frames.len(),
                "Query complete"
            );
            Ok(frames)
        }
        Err(e) => {
            e.log_error();
            Err(e)
        }
    }
}
