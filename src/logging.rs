use anyhow::Result;
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Log files are prefixed with this name inside `<data dir>/logs`
pub const LOG_PREFIX: &str = "focuspad";

/// Filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the log filter: explicit level, then `RUST_LOG`, then the default
pub fn resolve_filter(level: Option<&str>, env_value: Option<String>) -> String {
    let level = level
        .map(str::to_string)
        .or(env_value)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // A bare level applies to this crate only; full directives pass through
    if level.contains('=') {
        level
    } else {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
    }
}

/// Send tracing output to daily-rotated files. The terminal belongs to the
/// popup, so nothing is written to stdout or stderr.
pub fn enable_logging(data_dir: &Path, level: Option<&str>) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(data_dir.join("logs"))?;

    let filter = resolve_filter(level, std::env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(appender)
        .init();
    Ok(())
}
