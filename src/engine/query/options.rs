use std::fmt;
use std::str::FromStr;

use crate::engine::series::SeriesPolicy;

/// Which transcoder a query runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    #[default]
    Table,
    TimeSeries,
}

impl FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(QueryMode::Table),
            "timeseries" | "time_series" => Ok(QueryMode::TimeSeries),
            other => Err(format!("unknown query mode: {other}")),
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Table => f.write_str("table"),
            QueryMode::TimeSeries => f.write_str("timeseries"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub mode: QueryMode,
    /// Name given to the table frame. Series frames are named after their series.
    pub frame_name: String,
    pub series_policy: SeriesPolicy,
}

impl QueryOptions {
    pub fn table(frame_name: impl Into<String>) -> Self {
        Self {
            mode: QueryMode::Table,
            frame_name: frame_name.into(),
            series_policy: SeriesPolicy::default(),
        }
    }

    pub fn time_series(series_policy: SeriesPolicy) -> Self {
        Self {
            mode: QueryMode::TimeSeries,
            frame_name: String::new(),
            series_policy,
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::table("Table")
    }
}
