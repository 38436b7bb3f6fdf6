//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "GANZHI_LOG";

static INIT: Once = Once::new();

/// Install a stderr `fmt` subscriber once per process.
///
/// `GANZHI_LOG` wins over `default_filter` (usually `[logging] filter`).
/// Later calls, or a subscriber installed elsewhere, are left alone.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
