//! Tracing initialization and subscriber setup.

use crate::infrastructure::paths::{get_data_dir, LOG_FILE_NAME};
use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// Events go to stderr, or when `config.log_file` is set, are appended without
/// ANSI colors to `todostate.log` in the data directory.
///
/// # Initialization Behavior
///
/// - Silently does nothing if the log file cannot be opened (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use todostate::observability::init_tracing;
/// use todostate::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if !config.log_file {
        let _ = registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return;
    }

    let data_dir = get_data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let _ = registry
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init();
}
