use crate::{CacheError, CacheResult, LocalCache};

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Process-local cache. Values live only as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Value>>,
    read_only: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that rejects every write, as storage that is full or disabled would.
    pub fn read_only() -> Self {
        Self {
            entries: Mutex::default(),
            read_only: true,
        }
    }

    /// A cache pre-populated with one entry.
    pub fn with_entry(key: &str, value: Value) -> Self {
        let cache = Self::new();
        if let Ok(mut entries) = cache.entries.lock() {
            entries.insert(key.to_string(), value);
        }
        cache
    }
}

impl LocalCache for MemoryCache {
    fn load(&self, key: &str) -> CacheResult<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::unavailable("memory cache lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> CacheResult<()> {
        if self.read_only {
            return Err(CacheError::unavailable("memory cache is read-only"));
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::unavailable("memory cache lock poisoned"))?;
        entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}
