use std::collections::HashMap;
use std::sync::Mutex;

use super::StateStore;
use crate::errors::StoreError;

/// Process-local store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is currently present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|m| m.contains_key(key))
            .unwrap_or(false)
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Poisoned("memory store".to_string())
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let guard = self.entries.lock().map_err(poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn set_raw(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(poisoned)?;
        guard.insert(key.to_string(), bytes);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(poisoned)?;
        guard.remove(key);
        Ok(())
    }
}
