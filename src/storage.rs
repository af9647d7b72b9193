//! Browser Storage
//!
//! `localStorage` as a key-value store. Falls back to memory when the
//! browser denies storage (private mode, disabled cookies), so the console
//! still works for the session.

use espacosow_core::{DomainError, DomainResult, KeyValueStore, MemoryStore, StorageConfig};
use wasm_bindgen::JsValue;

#[derive(Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, records will not survive a reload");
        }
        Self {
            storage,
            fallback: MemoryStore::new(),
        }
    }

    /// Log level override stored under `<namespace>_log_level`
    pub fn log_level(&self, config: &StorageConfig) -> Option<String> {
        self.get(&config.setting_key("log_level")).ok().flatten()
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(action: &str, key: &str, err: JsValue) -> DomainError {
    DomainError::Storage(format!("{} {}: {:?}", action, key, err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(|e| js_error("read", key, e)),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(|e| js_error("write", key, e)),
            None => self.fallback.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        match &self.storage {
            Some(storage) => storage.remove_item(key).map_err(|e| js_error("remove", key, e)),
            None => self.fallback.remove(key),
        }
    }
}
