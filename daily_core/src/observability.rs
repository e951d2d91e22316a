//! Tracing setup for binaries embedding the core.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a JSON `fmt` subscriber filtered by `RUST_LOG`, or by `log_level`
/// when the variable is unset or invalid.
///
/// Fails instead of panicking if a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
}
