use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Errors that can occur during cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One cached value with its absolute expiry (epoch seconds).
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    expires_at: i64,
    payload: String,
}

/// TTL key-value cache for proxy responses, one JSON file per key.
///
/// Expired or unreadable entries behave as misses: callers never see an
/// error from `get`, they just fall through to a fresh upstream fetch.
#[derive(Debug, Clone)]
pub struct VideoCache {
    cache_dir: PathBuf,
}

impl VideoCache {
    pub async fn new(cache_dir: PathBuf) -> Result<Self, CacheError> {
        fs::create_dir_all(&cache_dir).await?;
        Ok(VideoCache { cache_dir })
    }

    /// Look up a key. Returns `None` on miss, expiry, or a corrupt entry.
    pub async fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(_) => {
                debug!("VideoCache: miss for {}", key);
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("VideoCache: corrupt entry for {}, discarding: {}", key, e);
                Self::discard(&path).await;
                return None;
            }
        };

        if entry.expires_at <= Utc::now().timestamp() {
            debug!("VideoCache: expired entry for {}", key);
            Self::discard(&path).await;
            return None;
        }

        debug!("VideoCache: hit for {}", key);
        Some(entry.payload)
    }

    /// Store a value for `ttl_secs` seconds.
    pub async fn put(&self, key: &str, value: &str, ttl_secs: i64) -> Result<(), CacheError> {
        self.put_with_expiry(key, value, Utc::now().timestamp() + ttl_secs)
            .await
    }

    /// Store a value with an explicit absolute expiry (epoch seconds).
    pub async fn put_with_expiry(
        &self,
        key: &str,
        value: &str,
        expires_at: i64,
    ) -> Result<(), CacheError> {
        let entry = CacheEntry {
            expires_at,
            payload: value.to_string(),
        };
        let raw = serde_json::to_string(&entry)?;
        fs::write(self.entry_path(key), raw).await?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are fixed strings plus video ids; strip anything that
        // could escape the cache directory.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.cache_dir.join(format!("{}.json", safe))
    }

    async fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            warn!("VideoCache: failed to remove {}: {}", path.display(), e);
        }
    }
}
