//! Logging setup for the `holdem` binary.
//!
//! Engine events go through `tracing`; the binary installs a `fmt`
//! subscriber on stderr so game output on stdout stays clean.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Filter comes from `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`]. Calling it twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
