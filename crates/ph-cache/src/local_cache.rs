use crate::CacheResult;

use serde_json::Value;

/// Key-value store holding whole JSON documents.
///
/// `save` replaces any previous value under the key; there is no merge.
pub trait LocalCache: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key`.
    fn load(&self, key: &str) -> CacheResult<Option<Value>>;

    fn save(&self, key: &str, value: &Value) -> CacheResult<()>;

    /// Set aside an entry that could not be read so the next `save` starts
    /// clean. Stores without a notion of corruption do nothing.
    fn quarantine(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }
}
