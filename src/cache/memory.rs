//! In-memory and no-op caches

use super::{CacheError, PairCache};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, Value>,
    corrupt: bool,
}

/// Cache held in process memory
#[derive(Debug, Default)]
pub struct MemoryCache {
    state: Mutex<MemoryState>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache whose reads fail as corrupt until the next write
    pub fn corrupt() -> Self {
        let cache = Self::default();
        cache.state().corrupt = true;
        cache
    }

    /// Pre-populate `key`
    pub fn with_entry(self, key: impl Into<String>, value: Value) -> Self {
        self.state().entries.insert(key.into(), value);
        self
    }

    /// Whether `key` holds a value
    pub fn contains(&self, key: &str) -> bool {
        self.state().entries.contains_key(key)
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PairCache for MemoryCache {
    fn read_entry(&self, key: &str) -> Result<Value, CacheError> {
        let state = self.state();
        if state.corrupt {
            return Err(CacheError::Corrupt {
                location: "memory".to_string(),
                reason: "marked corrupt".to_string(),
            });
        }

        state
            .entries
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    fn write_entry(&self, key: &str, value: &Value) -> Result<(), CacheError> {
        let mut state = self.state();
        if state.corrupt {
            state.entries.clear();
            state.corrupt = false;
        }
        state.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        let mut state = self.state();
        state.entries.clear();
        state.corrupt = false;
        Ok(())
    }
}

/// Cache that stores nothing; every read is a miss
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl PairCache for NullCache {
    fn read_entry(&self, key: &str) -> Result<Value, CacheError> {
        Err(CacheError::NotFound(key.to_string()))
    }

    fn write_entry(&self, _key: &str, _value: &Value) -> Result<(), CacheError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
