//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`, filtered by the
//! `GIT_BUG_LOG` environment variable (same syntax as `RUST_LOG`).
//! Command output never goes through the logger.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GIT_BUG_LOG";

/// Filter used when `GIT_BUG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

fn filter_from(value: Option<&str>) -> EnvFilter {
    value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let value = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(value.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
