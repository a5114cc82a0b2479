//! Key/value persistence for the serialized application state.
//!
//! [`StorageBackend`] implementations report failures as [`StateError`]s.
//! [`Persistence`] sits on top and is the fail-soft boundary: it namespaces
//! keys, handles (de)serialization and turns every failure into `false` or
//! `None` plus a warning, so callers never see a storage error.

pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::{config::Config, errors::Result, model::ApplicationState};

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;

/// Raw string storage addressed by key.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, data: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    /// Verifies the backend can currently accept writes.
    fn probe(&self) -> Result<()>;
}

/// Namespaced, versioned, fail-soft wrapper around a [`StorageBackend`].
pub struct Persistence {
    backend: Box<dyn StorageBackend>,
    namespace: String,
    state_key: String,
    version_key: String,
    version: String,
}

impl Persistence {
    pub fn new(backend: Box<dyn StorageBackend>, config: &Config) -> Self {
        Self {
            backend,
            namespace: config.storage_namespace.clone(),
            state_key: config.state_key.clone(),
            version_key: config.version_key.clone(),
            version: config.schema_version.clone(),
        }
    }

    /// Persistence backed by [`MemoryStorage`] with default keys.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()), &Config::default())
    }

    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}_{}", self.namespace, key)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_available(&self) -> bool {
        match self.backend.probe() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "storage backend unavailable");
                false
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let full_key = self.namespaced_key(key);
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(key = %full_key, error = %err, "failed to serialize value");
                return false;
            }
        };
        match self.backend.write(&full_key, &json) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %full_key, error = %err, "failed to save value");
                false
            }
        }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = self.namespaced_key(key);
        let data = match self.backend.read(&full_key) {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %full_key, error = %err, "failed to load value");
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key = %full_key, error = %err, "stored value is not valid");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        let full_key = self.namespaced_key(key);
        match self.backend.remove(&full_key) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %full_key, error = %err, "failed to remove value");
                false
            }
        }
    }

    /// Writes the state blob followed by the version marker.
    pub fn save_state(&self, state: &ApplicationState) -> bool {
        if !self.save(&self.state_key, state) {
            return false;
        }
        self.save(&self.version_key, &self.version)
    }

    /// Reads the state blob. A differing version marker is logged but the blob
    /// is still returned.
    pub fn load_state(&self) -> Option<ApplicationState> {
        let state: ApplicationState = self.load(&self.state_key)?;
        match self.load::<String>(&self.version_key) {
            Some(stored) if stored != self.version => {
                tracing::warn!(
                    stored = %stored,
                    current = %self.version,
                    "persisted state version differs from current version"
                );
            }
            Some(_) => {}
            None => tracing::warn!("persisted state has no version marker"),
        }
        Some(state)
    }

    pub fn clear_state(&self) -> bool {
        let state_removed = self.remove(&self.state_key);
        let version_removed = self.remove(&self.version_key);
        state_removed && version_removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persistence_with(storage: &MemoryStorage) -> Persistence {
        Persistence::new(Box::new(storage.clone()), &Config::default())
    }

    #[test]
    fn save_state_writes_blob_and_version_under_namespace() {
        let storage = MemoryStorage::new();
        let persistence = persistence_with(&storage);
        let state = ApplicationState {
            initialized: true,
            ..ApplicationState::default()
        };
        assert!(persistence.save_state(&state));
        assert_eq!(
            storage.keys(),
            vec![
                persistence.namespaced_key("state"),
                persistence.namespaced_key("version")
            ]
        );
        assert_eq!(persistence.load_state(), Some(state));
    }

    #[test]
    fn failures_degrade_to_false_and_none() {
        let storage = MemoryStorage::new();
        let persistence = persistence_with(&storage);
        storage.set_available(false);
        assert!(!persistence.is_available());
        assert!(!persistence.save_state(&ApplicationState::default()));
        assert!(persistence.load_state().is_none());
        assert!(!persistence.remove("state"));
    }

    #[test]
    fn corrupt_blob_loads_as_none() {
        let storage = MemoryStorage::new();
        let persistence = persistence_with(&storage);
        storage
            .write(&persistence.namespaced_key("state"), "{not json")
            .unwrap();
        assert!(persistence.load_state().is_none());
    }

    #[test]
    fn version_mismatch_still_returns_state() {
        let storage = MemoryStorage::new();
        let persistence = persistence_with(&storage);
        assert!(persistence.save_state(&ApplicationState::default()));
        assert!(persistence.save("version", &"0.0.0-legacy"));
        assert!(persistence.load_state().is_some());
    }

    #[test]
    fn clear_state_removes_both_keys() {
        let storage = MemoryStorage::new();
        let persistence = persistence_with(&storage);
        persistence.save_state(&ApplicationState::default());
        assert!(persistence.clear_state());
        assert!(storage.is_empty());
    }
}
