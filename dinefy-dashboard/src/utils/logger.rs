//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set. Otherwise the level from `LOG_LEVEL` applies to
//! this crate, the HTTP trace layer and the `security` / `http_access`
//! targets.

use std::path::Path;
use tracing_subscriber::EnvFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Initialize the logger with defaults (stdout, plain text, info)
pub fn init_logger() -> Result<(), InitError> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger with optional JSON output and a daily log file
///
/// The file is used only when `log_dir` already exists.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> Result<(), InitError> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "dinefy-dashboard"));

    match (json, file_appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.try_init(),
    }
}

fn default_directives(level: &str) -> String {
    format!("dinefy_dashboard={level},tower_http={level},security={level},http_access={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives("debug");
        assert!(directives.starts_with("dinefy_dashboard=debug,tower_http=debug"));
        assert!(directives.contains("security=debug"));
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
