//! Form persistence on top of local storage slots

use super::local::{LocalStorage, StorageError};
use super::traits::FormStore;
use crate::state::FormData;

/// Default slot name for in-progress form data
pub const DEFAULT_STORAGE_KEY: &str = "formData";

/// Persists form data as JSON in a single local storage slot
#[derive(Debug, Clone)]
pub struct LocalFormStore {
    storage: LocalStorage,
    key: String,
}

impl LocalFormStore {
    pub fn new(storage: LocalStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    fn try_load(&self) -> Result<Option<FormData>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: self.key.clone(),
                source,
            })
    }

    fn try_save(&self, data: &FormData) -> Result<(), StorageError> {
        let json = serde_json::to_string(data).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set_item(&self.key, &json)
    }
}

impl FormStore for LocalFormStore {
    fn load(&self) -> Option<FormData> {
        match self.try_load() {
            Ok(data) => {
                tracing::debug!(key = %self.key, found = data.is_some(), "loaded saved form data");
                data
            }
            Err(err) => {
                tracing::warn!("Error loading form data from local storage: {err}");
                None
            }
        }
    }

    fn save(&self, data: &FormData) {
        if let Err(err) = self.try_save(data) {
            tracing::warn!("Error saving form data to local storage: {err}");
        }
    }

    fn clear(&self) {
        if let Err(err) = self.storage.remove_item(&self.key) {
            tracing::warn!("Error clearing form data from local storage: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LocalFormStore {
        LocalFormStore::new(LocalStorage::new(dir.path()), DEFAULT_STORAGE_KEY)
    }

    fn sample() -> FormData {
        FormData {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "1234567890".to_string(),
            address1: "1 Main St".to_string(),
            address2: "Apt 4".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "123456".to_string(),
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample());
        assert_eq!(store.load(), Some(sample()));
    }

    #[test]
    fn test_load_without_saved_data_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_load_corrupted_value_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("formData.json"), "{not json").unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_load_wrong_shape_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("formData.json"), "[1, 2, 3]").unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_load_partial_record_defaults_missing_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("formData.json"),
            r#"{"name":"Alice","city":"Springfield","extra":true}"#,
        )
        .unwrap();
        assert_eq!(
            store_in(&dir).load(),
            Some(FormData {
                name: "Alice".to_string(),
                city: "Springfield".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_persisted_json_uses_wire_names() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).save(&sample());
        let raw = fs::read_to_string(dir.path().join("formData.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["address1"], "1 Main St");
        assert_eq!(value["zip"], "123456");
    }

    #[test]
    fn test_failed_save_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample());

        // A directory where the temp file should go makes the write fail
        fs::create_dir(dir.path().join(".formData.json.tmp")).unwrap();
        store.save(&FormData::default());

        assert_eq!(store.load(), Some(sample()));
    }

    #[test]
    fn test_clear_removes_saved_data() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample());
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_without_saved_data_is_silent() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).clear();
    }

    #[test]
    fn test_custom_key_uses_own_slot() {
        let dir = TempDir::new().unwrap();
        let store = LocalFormStore::new(LocalStorage::new(dir.path()), "draft");
        store.save(&sample());
        assert!(dir.path().join("draft.json").exists());
        assert_eq!(store_in(&dir).load(), None);
        assert_eq!(store.key(), "draft");
    }
}
