//! Persistence of the single local draft slot.
//!
//! The host's key-value storage is injected through [`KeyValueStore`] so the
//! draft logic is testable against an in-memory fake and the web app can bind
//! it to `localStorage`.

use std::collections::HashMap;

use shared_types::HazardReport;
use thiserror::Error;

/// Fixed storage key; at most one draft exists per browser profile.
pub const DRAFT_KEY: &str = "hazard-report-draft";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value store contract (get/set/delete).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// The draft slot: serialize/deserialize one report under [`DRAFT_KEY`].
#[derive(Debug)]
pub struct DraftStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the report verbatim, valid or not, overwriting any prior
    /// draft. File previews are excluded by the report's serde shape.
    pub fn save(&mut self, report: &HazardReport) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(report).map_err(|e| StorageError::Write(e.to_string()))?;
        self.store.set(DRAFT_KEY, &json)
    }

    /// Load the stored draft, if any. A read failure or a corrupt blob is
    /// logged for diagnostics and treated identically to "no draft exists".
    pub fn load(&self) -> Option<HazardReport> {
        let raw = match self.store.get(DRAFT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("failed to read draft slot: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!("discarding corrupt draft: {e}");
                None
            }
        }
    }

    /// Remove the slot. Clearing an absent draft is a no-op, not an error.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(DRAFT_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
