//! Logging Infrastructure
//!
//! Structured logging setup shared by the admin binary and integration
//! tests.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an explicit level (falls back to `RUST_LOG`,
/// then "info")
pub fn init_logger_with_level(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
