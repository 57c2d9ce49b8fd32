//! File-backed key-value persistence for GoodAds profiles

use super::KeyValueStore;
use crate::core::{GoodAdsError, Result};
use async_trait::async_trait;
use log::warn;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

// ============================================================================
// File Store
// ============================================================================

/// Stores all keys in a single JSON object file.
///
/// Every batch rewrites the whole file through a temp file and a rename, so
/// the file on disk is always either the previous or the next state.
pub struct FileStore {
    path: PathBuf,
    // serializes read-modify-write cycles issued through this handle
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn load(&self) -> Result<Entries> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(GoodAdsError::StorageRead(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&data).map_err(|e| {
            GoodAdsError::StorageRead(format!(
                "Failed to parse '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(err) => {
                // Unreadable contents cannot be merged; the new batch replaces them.
                warn!(
                    "discarding unreadable store contents: path='{}' error='{}'",
                    self.path.display(),
                    err
                );
                Entries::new()
            }
        };

        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }

        let bytes = serde_json::to_vec_pretty(&entries).map_err(|e| {
            GoodAdsError::StorageWrite(format!("Failed to serialize entries: {}", e))
        })?;
        atomic_write(&self.path, &bytes).await
    }

    async fn remove_all(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GoodAdsError::StorageWrite(format!(
                "Failed to delete '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }
}

async fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|err| {
            GoodAdsError::StorageWrite(format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                err
            ))
        })?;
    }

    let tmp = path.with_extension("tmp");
    let result = write_and_sync(&tmp, bytes).await;
    if let Err(err) = result {
        let _ = fs::remove_file(&tmp).await;
        return Err(err);
    }

    fs::rename(&tmp, path).await.map_err(|err| {
        GoodAdsError::StorageWrite(format!(
            "Failed to rename temp file '{}' -> '{}': {}",
            tmp.display(),
            path.display(),
            err
        ))
    })?;
    Ok(())
}

async fn write_and_sync(tmp: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |err: std::io::Error| {
        GoodAdsError::StorageWrite(format!(
            "Failed to write temp file '{}': {}",
            tmp.display(),
            err
        ))
    };

    let mut file = File::create(tmp).await.map_err(write_err)?;
    file.write_all(bytes).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;
    file.sync_all().await.map_err(write_err)?;
    Ok(())
}
