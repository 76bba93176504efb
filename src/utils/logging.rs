// ============================================================================
// LOGGING - console logger installed only when configuration allows it
// ============================================================================
// Everything logs through the `log` facade. Without an installed logger and
// with the max level at `Off`, every `log::*!` call is a no-op.
// ============================================================================

use log::LevelFilter;

use crate::config::AppConfig;

pub fn level_for(config: &AppConfig) -> LevelFilter {
    if config.is_logging_enabled() {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}

pub fn init(config: &AppConfig) {
    let level = level_for(config);
    match level.to_level() {
        Some(level) => {
            wasm_logger::init(wasm_logger::Config::new(level));
            log::info!("🪵 Console logging enabled ({})", level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}
