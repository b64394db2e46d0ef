//! Logging bootstrap.
//!
//! The library emits `tracing` events; installing a subscriber is the
//! binary's job. [`init`] wires up a formatted stderr subscriber with an
//! env-filter, so `RUST_LOG` can always override the defaults.

use tracing_subscriber::EnvFilter;

/// Default filter when running normally.
const DEFAULT_FILTER: &str = "coastwatch=info";

/// Default filter with `--verbose`.
const VERBOSE_FILTER: &str = "coastwatch=debug,info";

/// Install the global tracing subscriber. Call once, from the binary.
///
/// `RUST_LOG` takes precedence over the `verbose` flag when set.
pub fn init(verbose: bool) {
    let default = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
