//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The filter comes from `CONTRACTS_LOG`, then `RUST_LOG`; without either,
/// only warnings are shown, or debug output with `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CONTRACTS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
