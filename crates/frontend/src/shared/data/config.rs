//! Runtime configuration for the backend-as-a-service connection.
//!
//! Deployments set `window.APP_STORE_URL`, `window.APP_STORE_KEY` and
//! `window.APP_GEO_API_KEY` from a small config script next to index.html.
//! Without the globals the store URL falls back to the current origin,
//! which covers reverse-proxied setups.

use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root URL of the data service, no trailing slash.
    pub base_url: String,
    /// Public API key sent as the `apikey` header with every request.
    pub anon_key: String,
    /// Key for the external state/city catalog.
    pub geo_api_key: String,
}

static CONFIG: OnceCell<StoreConfig> = OnceCell::new();

fn read_global(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    value.as_string().filter(|s| !s.is_empty())
}

fn origin_fallback() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, hostname)
}

pub fn store_config() -> &'static StoreConfig {
    CONFIG.get_or_init(|| {
        let base_url = read_global("APP_STORE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(origin_fallback);
        let anon_key = read_global("APP_STORE_KEY").unwrap_or_default();
        let geo_api_key = read_global("APP_GEO_API_KEY").unwrap_or_default();
        StoreConfig {
            base_url,
            anon_key,
            geo_api_key,
        }
    })
}

/// REST root for table and view access.
pub fn rest_url(table: &str) -> String {
    format!("{}/rest/v1/{}", store_config().base_url, table)
}

/// Auth endpoint root.
pub fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{}", store_config().base_url, path)
}

/// Object storage endpoint root.
pub fn storage_url(path: &str) -> String {
    format!("{}/storage/v1/{}", store_config().base_url, path)
}
