//! Pair listing cache
//!
//! Exchanges with a pair listing endpoint keep a copy of the listing in a
//! key-value JSON store so that a quote normally needs a single request.
//! Any read failure is a cache miss for callers; the distinct variants of
//! [`CacheError`] exist for logging and tests.

mod file;
mod memory;

pub use file::{FileCache, CACHE_FILE_NAME};
pub use memory::{MemoryCache, NullCache};

use serde_json::Value;
use thiserror::Error;

/// Cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// No cache file, or no entry under the key
    #[error("No cache entry for {0}")]
    NotFound(String),
    /// Cache exists but cannot be parsed
    #[error("Cache at {location} is invalid: {reason}")]
    Corrupt { location: String, reason: String },
    /// File system failure
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Entry could not be serialized
    #[error("Cache serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CacheError {
    /// True for failures that mean "nothing usable cached"
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::NotFound(_) | CacheError::Corrupt { .. })
    }
}

/// Key-value store for JSON documents
pub trait PairCache: Send + Sync {
    /// Read the document stored under `key`
    fn read_entry(&self, key: &str) -> Result<Value, CacheError>;
    /// Store `value` under `key`, creating the store if needed
    fn write_entry(&self, key: &str, value: &Value) -> Result<(), CacheError>;
    /// Remove every entry
    fn clear(&self) -> Result<(), CacheError>;
}

/// Cache key for an exchange's pair listing
pub fn pairs_key(exchange: &str) -> String {
    format!("{}_asset_pairs", exchange.to_lowercase())
}
