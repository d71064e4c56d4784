use std::path::PathBuf;
use std::time::Duration;

/// Dashboard service configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (session store, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Fallback level when RUST_LOG is unset |
/// | LOG_DIR | (none) | Daily rolling log files, if the directory exists |
/// | JSON_LOGS | false | JSON log lines |
/// | SESSION_POLL_MS | 1000 | Session store re-read interval |
/// | SIMULATE_DELAYS | true | Sleep in simulated account calls |
/// | TEST_MODE_LOGIN | true | Accept the fixed test credential |
/// | ACCOUNT_EMAIL | user@example.com | Email the delete-account dialog must match |
/// | SAVE_CONFIRMATION_MS | 3000 | How long "settings saved" stays visible |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
///
/// ```ignore
/// WORK_DIR=/tmp/dinefy HTTP_PORT=8080 cargo run -p dinefy-dashboard
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub json_logs: bool,
    pub session_poll_ms: u64,
    pub simulate_delays: bool,
    pub test_mode_login: bool,
    pub account_email: String,
    pub save_confirmation_ms: u64,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            json_logs: std::env::var("JSON_LOGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            session_poll_ms: std::env::var("SESSION_POLL_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            simulate_delays: std::env::var("SIMULATE_DELAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            test_mode_login: std::env::var("TEST_MODE_LOGIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            account_email: std::env::var("ACCOUNT_EMAIL")
                .unwrap_or_else(|_| "user@example.com".into()),
            save_confirmation_ms: std::env::var("SAVE_CONFIRMATION_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the working directory and port, keeping everything else
    ///
    /// Mostly for tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// `<work_dir>/storage`, home of the session store
    pub fn storage_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("storage")
    }

    pub fn session_poll_interval(&self) -> Duration {
        Duration::from_millis(self.session_poll_ms.max(1))
    }

    pub fn save_confirmation(&self) -> Duration {
        Duration::from_millis(self.save_confirmation_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
