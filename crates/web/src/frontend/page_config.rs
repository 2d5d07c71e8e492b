//! Reads optional UI overrides published by the host page.
//!
//! The page may set `window.__PRODCHECK_CONFIG__` to a JSON string before the
//! WASM module loads. Absent means defaults.

use anyhow::{Context, anyhow};
use wasm_bindgen::JsValue;

use crate::config::UiConfig;

pub const CONFIG_GLOBAL: &str = "__PRODCHECK_CONFIG__";

fn read_global_string(name: &str) -> anyhow::Result<Option<String>> {
    let window = web_sys::window().context("no window object")?;

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| anyhow!("failed to read window.{name}: {e:?}"))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    value
        .as_string()
        .map(Some)
        .ok_or_else(|| anyhow!("window.{name} must be a JSON string"))
}

/// UI config for this page load.
pub fn load() -> anyhow::Result<UiConfig> {
    match read_global_string(CONFIG_GLOBAL)? {
        None => Ok(UiConfig::default()),
        Some(raw) => UiConfig::from_json(&raw).with_context(|| format!("window.{CONFIG_GLOBAL}")),
    }
}
