//! Logger setup for the dirstore binary

use std::sync::Once;

use env_logger::{Builder, Target};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the global logger once
///
/// `level` applies to this crate, dependencies stay at `warn`. `RUST_LOG`
/// overrides both. Records go to stderr so they never mix with menu output.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let _ = Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module("dirstore", level)
            .target(Target::Stderr)
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    });
}
