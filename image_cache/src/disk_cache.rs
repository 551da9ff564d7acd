//! One file per account id under a single cache root.
//!
//! Freshness comes from the file's modification time. Stale files are left
//! in place and simply overwritten by the next successful fetch.

use std::{
    path::PathBuf,
    process,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, SystemTime},
};

use common::CanonicalId;
use tokio::fs;
use tracing::{debug, trace};

use crate::errors::CacheError;

/// Heads older than this are refetched (24h).
pub const MAX_CACHE_AGE: Duration = Duration::from_secs(24 * 60 * 60);

// keeps concurrent writers to the same key on distinct temp files
static WRITE_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedImageObject {
    pub image: Vec<u8>,
    pub fresh: bool,
}

#[derive(Debug, Clone)]
pub struct DiskCache {
    cache_dir: PathBuf,
    max_age: Duration,
}

impl DiskCache {
    /// Opens the cache, creating `cache_dir` if it does not exist yet.
    pub async fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let cache_dir = cache_dir.into();

        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|source| CacheError::CreateDir {
                path: cache_dir.clone(),
                source,
            })?;

        Ok(Self {
            cache_dir,
            max_age: MAX_CACHE_AGE,
        })
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;

        self
    }

    pub fn cache_path(&self, key: &CanonicalId) -> PathBuf {
        self.cache_dir.join(format!("{key}.png"))
    }

    /// Missing and unreadable entries both come back as `None`.
    pub async fn get_item(&self, key: &CanonicalId) -> Option<CachedImageObject> {
        let path = self.cache_path(key);

        let Ok(modified) = fs::metadata(&path).await.and_then(|meta| meta.modified()) else {
            trace!("Disk cache miss for {}", key);
            return None;
        };

        let image = match fs::read(&path).await {
            Ok(image) => image,
            Err(err) => {
                debug!("Failed to read cached head {}: {}", path.display(), err);
                return None;
            }
        };

        // a timestamp from the future counts as just written
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        let fresh = age < self.max_age;

        trace!("Disk cache hit for {} (age {}s, fresh {})", key, age.as_secs(), fresh);

        Some(CachedImageObject { image, fresh })
    }

    /// Overwrites whatever is stored under `key`. Concurrent writers race and
    /// the last one wins.
    ///
    /// The bytes land in a temp file that is renamed over the entry, so
    /// readers see either the old head or the new one, never a partial file.
    pub async fn insert_item(&self, key: &CanonicalId, image: &[u8]) -> Result<(), CacheError> {
        let path = self.cache_path(key);
        let temp_path = self.cache_dir.join(format!(
            "{key}.png.{}.{}.tmp",
            process::id(),
            WRITE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(source) = fs::write(&temp_path, image).await {
            let _ = fs::remove_file(&temp_path).await;

            return Err(CacheError::Write {
                path: temp_path,
                source,
            });
        }

        if let Err(source) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;

            return Err(CacheError::Write { path, source });
        }

        debug!("Stored {} bytes at {}", image.len(), path.display());

        Ok(())
    }
}
