//! Cache manager for persisting API responses to disk
//!
//! Provides a `CacheManager` that stores one JSON file per resource, each
//! recording the source URL, the fetch timestamp and the raw payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading or writing cache files
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem access failed
    #[error("Cache I/O error: {0}")]
    Io(#[from] io::Error),

    /// The cache file exists but does not hold a valid entry
    #[error("Corrupt cache file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The entry could not be serialized
    #[error("Failed to serialize cache entry: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A cached API response as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// URL the payload was fetched from
    pub url: String,
    /// When the payload was fetched
    pub timestamp: DateTime<Utc>,
    /// The raw response body
    pub data: Value,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time
    pub fn new(url: impl Into<String>, data: Value) -> Self {
        Self {
            url: url.into(),
            timestamp: Utc::now(),
            data,
        }
    }

    /// Whether this entry may be served for `configured_url` at time `now`
    ///
    /// The entry is valid only if it was fetched from the same URL (ignoring
    /// surrounding whitespace) and strictly less than `ttl` has elapsed.
    /// A timestamp in the future counts as zero elapsed time.
    pub fn is_valid(&self, configured_url: &str, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self.url.trim() != configured_url.trim() {
            return false;
        }

        let elapsed = now
            .signed_duration_since(self.timestamp)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed < ttl
    }
}

/// Manages reading and writing cache files in a single directory
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a CacheManager rooted at `cache_dir`
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    #[cfg(test)]
    pub(crate) fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the path to a cache file for the given key
    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Reads the entry stored under `key`
    ///
    /// # Returns
    /// * `Ok(None)` if no cache file exists
    /// * `Ok(Some(entry))` if the file parses
    /// * `Err(CacheError::Corrupt)` if the file content is not a valid entry
    /// * `Err(CacheError::Io)` if the file exists but cannot be read
    pub fn read(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let path = self.cache_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CacheError::Corrupt { path, source })
    }

    /// Replaces the entry stored under `key`
    ///
    /// The entry is written to a temporary file which is then renamed over
    /// the cache file, so readers never observe a half-written file.
    pub fn write(&self, key: &str, entry: &CacheEntry) -> Result<(), CacheError> {
        fs::create_dir_all(&self.cache_dir)?;

        let json = serde_json::to_string_pretty(entry).map_err(CacheError::Serialize)?;

        let path = self.cache_path(key);
        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = write_then_rename(&temp_path, &path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(CacheError::Io(e));
        }

        Ok(())
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(temp_path, path)
}
