//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "marquee.log";

/// Initializes the global tracing subscriber writing to the rotating log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the log file cannot be opened
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use marquee::observability::init_tracing;
/// use marquee::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let log_path = crate::infrastructure::paths::get_data_dir().join(LOG_FILE_NAME);
    init_tracing_at(config, &log_path);
}

/// Same as [`init_tracing`] with an explicit log file location.
pub fn init_tracing_at(config: &Config, log_path: &Path) {
    let Ok(writer) = RotatingFile::open(log_path) else {
        return;
    };

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true)
                .with_writer(Mutex::new(writer)),
        );

    let _ = subscriber.try_init();
}

/// Builds the level filter, preferring `RUST_LOG` over the configured level.
fn build_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = trace_level.unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}
