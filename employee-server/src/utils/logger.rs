//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.
//! `RUST_LOG` takes precedence over the configured level when set.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix, rolled daily as `employee-server.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "employee-server";

/// Initialize the logger with optional JSON formatting and file output
///
/// File output is only enabled when `log_dir` already exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));

    // try_init: a second call (tests, embedded use) keeps the first subscriber
    let _ = match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(appender)) => subscriber.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => subscriber.try_init(),
    };
}
