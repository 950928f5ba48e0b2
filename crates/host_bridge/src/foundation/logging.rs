//! Logging utilities

pub use log::{debug, error, info, trace, warn};

use crate::config::LoggingConfig;

/// Initialize the logging system
///
/// The configured level is the default filter; `RUST_LOG` still overrides it.
/// Calling this more than once is harmless, later calls are ignored.
pub fn init(config: &LoggingConfig) {
    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.as_filter()),
    )
    .format_timestamp_millis()
    .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}

/// Initialize logging for tests, capturing output per test
pub fn init_for_tests() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
