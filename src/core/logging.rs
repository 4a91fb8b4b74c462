//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`. Without
//! `RUST_LOG`, the given default directive applies (`info` for the CLI,
//! `debug` with `--verbose`).

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; later calls are ignored
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
