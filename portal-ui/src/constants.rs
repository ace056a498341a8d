// SPDX-License-Identifier: MIT OR Apache-2.0

use log::Level;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const DEFAULT_APP_NAME: &str = "Goomba Portal";

/// Optional runtime configuration injected as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "appName")]
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Reads `window.__APP_CONFIG`. A missing object yields the defaults, a
/// malformed one is an error.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "window is not available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

/// Fallback document title for routes without `meta.title`.
pub fn app_name() -> String {
    app_config()
        .ok()
        .and_then(|c| c.app_name)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn log_level() -> Level {
    parse_log_level(app_config().ok().and_then(|c| c.log_level).as_deref())
}

pub fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(if cfg!(feature = "debugAssertions") {
            Level::Debug
        } else {
            Level::Info
        })
}
