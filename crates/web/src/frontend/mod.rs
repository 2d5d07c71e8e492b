//! Leptos frontend (browser build only).

pub mod app;
pub mod console;
pub mod page_config;

use leptos::*;
use wasm_bindgen::prelude::*;

use prodcheck_observability::LogConfig;

use crate::config::UiConfig;

use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, problem) = match page_config::load() {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };

    prodcheck_observability::init_with_writer(
        &LogConfig::browser(config.log_filter.clone()),
        console::ConsoleMakeWriter,
    );
    if let Some(err) = problem {
        tracing::warn!(error = %format!("{err:#}"), "ignoring page config, using defaults");
    }

    tracing::info!(title = %config.title, "mounting product checker");
    mount_to_body(move || view! { <App config=config/> });
}
