// ============================================================================
// DEEPSTATION HELPER - buoy reservation dashboard (Yew + WASM)
// ============================================================================
// Layers:
// - Views: Yew components, render only
// - Hooks: glue between components and viewmodels
// - ViewModels: screen logic over injected API / storage / clock
// - State: reducer for the schedule screen
// - Stores / Services: persisted session and HTTP calls
// - Models: wire types and derived table rows
// ============================================================================

pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::config::CONFIG;
use crate::views::App;

/// Installs the panic hook and logger, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();
    utils::logging::init(&CONFIG);
    log::info!("🚀 {} starting ({})", utils::messages::APP_TITLE, CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
