use std::env;
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::engine::series::SeriesPolicy;
use crate::shared::response::OutputFormat;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub transcode: TranscodeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscodeConfig {
    /// Name of the frame produced in table mode.
    pub table_frame_name: String,
    pub series_policy: SeriesPolicy,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Text output truncates longer strings to this many characters.
    pub max_cell_width: usize,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("transcode.table_frame_name", "Table")?
        .set_default("transcode.series_policy", "strict")?
        .set_default("output.format", "text")?
        .set_default("output.max_cell_width", 10)
}

fn env_overrides() -> Environment {
    Environment::with_prefix("DOCFRAME")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then the optional file named by `DOCFRAME_CONFIG`, then
/// `DOCFRAME__SECTION__KEY` variables.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let config_path = env::var("DOCFRAME_CONFIG").unwrap_or_else(|_| "docframe".to_string());

    defaults()?
        .add_source(File::with_name(&config_path).required(false))
        .add_source(env_overrides())
        .build()?
        .try_deserialize()
}

/// Like [`load_settings`] but the file at `path` must exist.
pub fn load_settings_from(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    defaults()?
        .add_source(File::from(path.as_ref()))
        .add_source(env_overrides())
        .build()?
        .try_deserialize()
}
