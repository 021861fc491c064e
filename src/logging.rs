//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// `RUST_LOG` still takes precedence over `default_level`.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).init();
}
