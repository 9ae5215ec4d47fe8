//! `localStorage`-backed key-value store for the draft slot.

use report_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Browser `localStorage` behind the core's storage seam.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let storage = window.local_storage()?.ok_or("No localStorage")?;
        Ok(Self { storage })
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(describe(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Fails when the quota is exceeded or storage is disabled
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(describe(e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(describe(e)))
    }
}
