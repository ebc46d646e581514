//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!("Tracing subscriber installed");
    }
}
