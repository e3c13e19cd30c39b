//! Logger setup for the command line binary.

use env_logger::Env;

/// Initialize the global logger.
///
/// Defaults to warnings and above; `RUST_LOG` overrides the filter.
pub fn initialize() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
