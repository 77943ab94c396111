//! Local durable key-value storage backing the experience list.

pub(crate) mod error;
pub(crate) mod file_cache;
pub(crate) mod local_cache;
pub(crate) mod memory_cache;


pub use error::{CacheError, Result as CacheResult};
pub use file_cache::FileCache;
pub use local_cache::LocalCache;
pub use memory_cache::MemoryCache;
