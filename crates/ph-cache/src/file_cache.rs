use crate::{CacheError, CacheResult, LocalCache};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory-backed cache storing each key as `<key>.json`.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// The directory is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn entry_path(&self, key: &str) -> CacheResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Backs up a corrupted entry for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self, key: &str) -> CacheResult<Option<PathBuf>> {
        let path = self.entry_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(CacheError::backup_failed)?;

        warn!("Backed up corrupted cache entry to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl LocalCache for FileCache {
    fn load(&self, key: &str) -> CacheResult<Option<Value>> {
        let path = self.entry_path(key)?;

        if !path.exists() {
            debug!("No cache entry for '{key}' at {path:?}");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| CacheError::file_read(path.clone(), e))?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => {
                debug!("Loaded cache entry '{key}'");
                Ok(Some(value))
            }
            Err(e) => {
                warn!("Cache entry corrupted at {path:?}: {e}");
                Err(CacheError::corrupted(path, e.to_string()))
            }
        }
    }

    /// Writes through a temp file, fsyncs, then renames over the entry so a
    /// crash mid-write never leaves a truncated file behind.
    fn save(&self, key: &str, value: &Value) -> CacheResult<()> {
        let final_path = self.entry_path(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| CacheError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(value)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| CacheError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CacheError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved cache entry '{key}'");
        Ok(())
    }

    fn quarantine(&self, key: &str) -> CacheResult<()> {
        self.backup_corrupted(key).map(|_| ())
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
fn validate_key(key: &str) -> CacheResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CacheError::invalid_key(key))
    }
}
