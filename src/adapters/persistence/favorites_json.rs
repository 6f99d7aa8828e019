//! Implements FavoritePort using a JSON file.
//!
//! Keeps the set of favorite movie ids; movies not in the set are not favorites.

use crate::domain::FetchError;
use crate::ports::FavoritePort;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// On-disk layout: `{"favorite_ids": [..]}`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct FavoritesData {
    favorite_ids: BTreeSet<i64>,
}

/// JSON file-based favorites storage.
pub struct FavoritesJson {
    path: std::path::PathBuf,
    cache: tokio::sync::RwLock<FavoritesData>,
}

impl FavoritesJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(FavoritesData::default()),
        }
    }

    /// Load favorites from disk. A missing file is an empty set; a corrupt one is
    /// logged and treated as empty. Any other read error is returned so the file
    /// is never overwritten by a later save.
    pub async fn load(&self) -> Result<(), FetchError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "favorites file unreadable, starting empty");
                FavoritesData::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => FavoritesData::default(),
            Err(e) => {
                return Err(FetchError::new(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        debug!(count = data.favorite_ids.len(), "favorites loaded");
        *self.cache.write().await = data;
        Ok(())
    }

    /// Favorite ids in ascending order.
    pub async fn favorite_ids(&self) -> Vec<i64> {
        self.cache.read().await.favorite_ids.iter().copied().collect()
    }

    /// Write-replace: temp file, sync_all, rename over the target.
    async fn save(&self, data: &FavoritesData) -> Result<(), FetchError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| FetchError::new(format!("encode favorites: {}", e)))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| FetchError::new(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| FetchError::new(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| FetchError::new(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| FetchError::new(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl FavoritePort for FavoritesJson {
    /// The write lock is held across the save, so writers never share the temp
    /// file. The cache only changes once the file is on disk.
    async fn set_favorite(&self, movie_id: i64, is_favorite: bool) -> Result<(), FetchError> {
        let mut cache = self.cache.write().await;
        let mut next = cache.clone();
        let changed = if is_favorite {
            next.favorite_ids.insert(movie_id)
        } else {
            next.favorite_ids.remove(&movie_id)
        };
        if !changed {
            return Ok(());
        }
        self.save(&next).await?;
        *cache = next;
        Ok(())
    }

    async fn is_favorite(&self, movie_id: i64) -> Result<bool, FetchError> {
        let cache = self.cache.read().await;
        Ok(cache.favorite_ids.contains(&movie_id))
    }
}
