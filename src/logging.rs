use anyhow::Context;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::Settings;

/// Parses the level configured under `logging.<key>`.
pub fn level_filter(key: &str, value: &str) -> anyhow::Result<LevelFilter> {
    value
        .parse::<LevelFilter>()
        .with_context(|| format!("logging.{key}: invalid level {value:?}"))
}

/// Installs the global subscriber: a stderr layer and a daily rolling
/// `docframe.log` in `logging.log_dir`.
///
/// Stdout stays free for rendered frames, so console output goes to stderr
/// even though the level key is `stdout_level`.
pub fn init(settings: &Settings) -> anyhow::Result<()> {
    let cfg = &settings.logging;
    let console_filter = level_filter("stdout_level", &cfg.stdout_level)?;
    let file_filter = level_filter("file_level", &cfg.file_level)?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "docframe.log");
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    info!(
        log_dir = %cfg.log_dir,
        table_frame = %settings.transcode.table_frame_name,
        series_policy = %settings.transcode.series_policy,
        format = %settings.output.format,
        "docframe ready"
    );
    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive("docframe=debug".parse().unwrap());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
