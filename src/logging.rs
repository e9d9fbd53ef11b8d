//! env_logger setup for the binary.

use env_logger::Env;

/// Defaults to `info`; override with RUST_LOG.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
