use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_SCRIPT_URL: &str = "http://localhost:8080/exec";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub script_url: Option<String>,
}

static SCRIPT_URL: OnceLock<String> = OnceLock::new();

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Picks the first configured script URL in precedence order.
pub fn resolve_script_url(
    env_url: Option<String>,
    window_url: Option<String>,
    file_config: Option<RuntimeConfig>,
) -> String {
    non_blank(env_url)
        .or_else(|| non_blank(window_url))
        .or_else(|| non_blank(file_config.and_then(|cfg| cfg.script_url)))
        .unwrap_or_else(|| DEFAULT_SCRIPT_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

// window.__LEAVEDESK_ENV = { SCRIPT_URL: "..." }, usually injected by env.js
#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    read_global("__LEAVEDESK_ENV", &["SCRIPT_URL", "script_url"])
}

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    read_global("__LEAVEDESK_CONFIG", &["script_url", "SCRIPT_URL"])
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_window_config() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"script_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__LEAVEDESK_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_url: &str) {}

/// `config.json` at the site root, whatever page `href` points at.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn config_json_url(href: &str) -> Option<reqwest::Url> {
    reqwest::Url::parse(href).ok()?.join("/config.json").ok()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = config_json_url(&href)?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not available: HTTP {}", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_script_url(value: String) -> String {
    SCRIPT_URL.get_or_init(|| value).clone()
}

pub async fn await_script_url() -> String {
    if let Some(cached) = SCRIPT_URL.get() {
        return cached.clone();
    }
    let env_url = get_from_env_js();
    let window_url = get_from_window_config();
    let file_config = if non_blank(env_url.clone()).is_some() || non_blank(window_url.clone()).is_some()
    {
        None
    } else {
        fetch_runtime_config().await
    };
    let from_file = file_config.is_some();
    let url = resolve_script_url(env_url, window_url, file_config);
    if from_file {
        write_window_config(&url);
    }
    log::info!("using script endpoint {}", url);
    cache_script_url(url)
}

pub async fn init() {
    let _ = await_script_url().await;
}
