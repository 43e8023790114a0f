//! Tracing setup shared by both binaries.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Kept quiet so logs don't
/// clutter the game.
const DEFAULT_FILTER: &str = "warn";

/// Installs a compact fmt subscriber writing to stderr.
///
/// Stdout belongs to the game, so logs never go there. Calling this more
/// than once is harmless.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
