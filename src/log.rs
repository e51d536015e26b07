//! Logger setup for the command-line tool

use log::LevelFilter;
use std::env;

/// Initialize logging to stderr
///
/// Uses `Debug` level when `debug_enabled`, `Warn` otherwise. `RUST_LOG`
/// overrides both when set.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A logger may already be installed when embedded in another binary
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
