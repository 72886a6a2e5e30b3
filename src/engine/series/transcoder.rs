use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::engine::document::{DocumentCursor, DocumentView, RawValue};
use crate::engine::errors::TranscodeError;
use crate::engine::frame::Frame;
use crate::engine::series::group::SeriesGroup;

pub const NAME_KEY: &str = "name";
pub const TS_KEY: &str = "ts";
pub const VALUE_KEY: &str = "value";

/// What to do with a row whose `value` or `ts` has the wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesPolicy {
    /// Abort the whole call.
    #[default]
    Strict,
    /// Skip the row and log it.
    Lenient,
}

impl FromStr for SeriesPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(SeriesPolicy::Strict),
            "lenient" => Ok(SeriesPolicy::Lenient),
            other => Err(format!("unknown series policy: {other}")),
        }
    }
}

impl fmt::Display for SeriesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesPolicy::Strict => f.write_str("strict"),
            SeriesPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

/// A validated `{name, ts, value}` row.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub name: String,
    pub ts: Option<i64>,
    pub value: RawValue,
}

/// Pulls the series fields out of one document.
///
/// `Ok(None)` means both `ts` and `value` were absent or null.
pub fn decode_row(doc: &DocumentView) -> Result<Option<SeriesRow>, TranscodeError> {
    let value = match doc.lookup(VALUE_KEY) {
        None | Some(RawValue::Null) => RawValue::Null,
        Some(v) if v.kind().numeric().is_some() => v.clone(),
        Some(_) => return Err(TranscodeError::invalid_value()),
    };

    let ts = match doc.lookup(TS_KEY) {
        None | Some(RawValue::Null) => None,
        Some(RawValue::DateTime(ms)) => Some(*ms),
        Some(_) => return Err(TranscodeError::invalid_timestamp()),
    };

    if ts.is_none() && value.is_null() {
        return Ok(None);
    }

    let name = match doc.lookup(NAME_KEY) {
        Some(RawValue::String(s)) => s.clone(),
        _ => String::new(),
    };

    Ok(Some(SeriesRow { name, ts, value }))
}

/// Groups rows by series name and emits one `(time, Value)` frame per group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesTranscoder {
    policy: SeriesPolicy,
}

impl SeriesTranscoder {
    pub fn new(policy: SeriesPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SeriesPolicy {
        self.policy
    }

    /// Frames keyed by series name, in first-seen order. Groups that never
    /// saw a numeric value are left out.
    pub fn transcode<C>(&self, cursor: &mut C) -> Result<IndexMap<String, Frame>, TranscodeError>
    where
        C: DocumentCursor + ?Sized,
    {
        let mut groups: IndexMap<String, SeriesGroup> = IndexMap::new();
        let mut rows = 0usize;
        let mut skipped = 0usize;

        while cursor.advance()? {
            rows += 1;
            let row = match decode_row(cursor.current()) {
                Ok(Some(row)) => row,
                Ok(None) => {
                    skipped += 1;
                    continue;
                }
                Err(e) if self.policy == SeriesPolicy::Lenient => {
                    warn!(target: "docframe::series", row = rows - 1, reason = %e, "Skipping invalid series row");
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            groups
                .entry(row.name.clone())
                .or_insert_with(|| SeriesGroup::new(row.name))
                .push(row.ts, row.value);
        }

        let mut frames = IndexMap::with_capacity(groups.len());
        for (name, group) in groups {
            let points = group.len();
            match group.into_frame() {
                Some(frame) => {
                    frames.insert(name, frame);
                }
                None => {
                    debug!(target: "docframe::series", series = %name, points, "Series has no numeric values, dropped");
                }
            }
        }

        debug!(
            target: "docframe::series",
            rows,
            skipped,
            series = frames.len(),
            policy = %self.policy,
            "Series transcoded"
        );
        Ok(frames)
    }
}

/// Shorthand for `SeriesTranscoder::new(policy).transcode(cursor)`.
pub fn transcode_series<C>(
    cursor: &mut C,
    policy: SeriesPolicy,
) -> Result<IndexMap<String, Frame>, TranscodeError>
where
    C: DocumentCursor + ?Sized,
{
    SeriesTranscoder::new(policy).transcode(cursor)
}
