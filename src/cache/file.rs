//! JSON file cache

use super::{CacheError, PairCache};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the cache file inside the cache directory
pub const CACHE_FILE_NAME: &str = "cryptoquote.cache";

/// Cache stored as a single JSON object in `<dir>/cryptoquote.cache`
///
/// Reads and writes are not locked; concurrent writers race and the last
/// one wins.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    /// Create a cache rooted at `dir`; nothing touches the disk until a write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CACHE_FILE_NAME),
        }
    }

    /// Location of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// Load the whole cache, `None` if there is no cache file
    fn read_all(&self) -> Result<Option<Map<String, Value>>, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(Some(entries)),
            Ok(_) => Err(CacheError::Corrupt {
                location: self.location(),
                reason: "not a JSON object".to_string(),
            }),
            Err(e) => Err(CacheError::Corrupt {
                location: self.location(),
                reason: e.to_string(),
            }),
        }
    }
}

impl PairCache for FileCache {
    fn read_entry(&self, key: &str) -> Result<Value, CacheError> {
        tracing::debug!(key, path = %self.path.display(), "Reading cache entry");

        self.read_all()?
            .and_then(|mut entries| entries.remove(key))
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    fn write_entry(&self, key: &str, value: &Value) -> Result<(), CacheError> {
        tracing::debug!(key, path = %self.path.display(), "Writing cache entry");

        let mut entries = match self.read_all() {
            Ok(Some(entries)) => entries,
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "Creating new cache file");
                if let Some(dir) = self.path.parent() {
                    fs::create_dir_all(dir)?;
                }
                Map::new()
            }
            Err(e) if e.is_miss() => {
                tracing::warn!(error = %e, "Replacing invalid cache file");
                Map::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.clone());
        fs::write(&self.path, serde_json::to_vec(&Value::Object(entries))?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Deleted cache file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No cache file to delete");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
