//! Diagnostic logging for the binary.
//!
//! Engine `tracing` events go to stderr so they never interleave with game
//! text on stdout. `RUST_LOG` picks the filter; without it only warnings show.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber. Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::warn!("logging initialised");
    }
}
