/*!
 * On-disk caching of catalog responses.
 *
 * Fetched episode lists and search results are stored as JSON files under
 * the user cache directory so repeated runs against the same series do not
 * hit the network. Entries carry the fetch timestamp; eviction beyond
 * overwrite-on-refresh is intentionally not implemented.
 */

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Stored cache entry wrapping the cached payload
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    /// When the payload was fetched from the catalog
    fetched_at: DateTime<Utc>,
    /// The cached response data
    data: T,
}

/// Flat-file JSON cache for catalog responses
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Open a cache rooted at `dir`, creating the directory if needed
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;
        Ok(Self { dir })
    }

    /// Open the cache at the default per-user location, if one exists
    pub fn open_default() -> Option<Self> {
        let dir = dirs::cache_dir()?.join("shownamer");
        match Self::new(dir) {
            Ok(cache) => Some(cache),
            Err(error) => {
                warn!("Response cache unavailable: {}", error);
                None
            }
        }
    }

    /// Load a cached payload for the given key parts, if present and readable
    pub fn load<T: DeserializeOwned>(&self, key_parts: &[&str]) -> Option<T> {
        let path = self.entry_path(key_parts);
        let content = fs::read_to_string(&path).ok()?;

        match serde_json::from_str::<Envelope<T>>(&content) {
            Ok(envelope) => {
                debug!(
                    "Cache hit for {:?} (fetched {})",
                    key_parts, envelope.fetched_at
                );
                Some(envelope.data)
            }
            Err(error) => {
                warn!("Discarding unreadable cache entry {:?}: {}", path, error);
                None
            }
        }
    }

    /// Store a payload under the given key parts.
    ///
    /// Best-effort: cache write failures are logged, never fatal.
    pub fn store<T: Serialize>(&self, key_parts: &[&str], data: &T) {
        let envelope = Envelope {
            fetched_at: Utc::now(),
            data,
        };

        if let Err(error) = self.write_entry(key_parts, &envelope) {
            warn!("Failed to write cache entry {:?}: {}", key_parts, error);
        }
    }

    fn write_entry<T: Serialize>(&self, key_parts: &[&str], envelope: &Envelope<T>) -> Result<()> {
        let json = serde_json::to_string_pretty(envelope)?;

        // Write through a temp file so a crash never leaves a truncated entry
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.entry_path(key_parts))?;
        Ok(())
    }

    fn entry_path(&self, key_parts: &[&str]) -> PathBuf {
        let mut hasher = Sha256::new();
        for part in key_parts {
            hasher.update(part.as_bytes());
            hasher.update([0]);
        }
        let digest = hasher.finalize();
        self.dir.join(format!("{:x}.json", digest))
    }
}
