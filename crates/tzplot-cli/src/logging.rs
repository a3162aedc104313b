use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr so they never mix with the plot.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
