//! Durable storage backends used by the owner process.

use crate::bangs::BangTable;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Error types for storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Failed to persist the table
    #[error("Failed to persist bangs: {0}")]
    PersistenceError(String),
    /// Failed to load the table
    #[error("Failed to load bangs: {0}")]
    LoadError(String),
}

/// Save/read primitives behind the owner process.
///
/// `save` replaces the stored table as a whole; `read` returns `None` when
/// nothing has been stored yet.
#[async_trait]
pub trait BangStorage: Send + Sync {
    async fn save(&self, table: &BangTable) -> Result<(), StorageError>;

    async fn read(&self) -> Result<Option<BangTable>, StorageError>;
}

/// JSON file storage with atomic writes
#[derive(Debug)]
pub struct FileBangStorage {
    path: PathBuf,
}

impl FileBangStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl BangStorage for FileBangStorage {
    /// Persist using atomic write (temp file + rename)
    async fn save(&self, table: &BangTable) -> Result<(), StorageError> {
        crate::debug!("Persisting {} bangs to {:?}", table.len(), self.path);

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::PersistenceError(e.to_string()))?;
        }

        let content = serde_json::to_vec_pretty(table)
            .map_err(|e| StorageError::PersistenceError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = tokio::fs::File::create(&temp_path).await.map_err(|e| {
                StorageError::PersistenceError(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(&content).await.map_err(|e| {
                StorageError::PersistenceError(format!("Failed to write: {}", e))
            })?;
            file.sync_all().await.map_err(|e| {
                StorageError::PersistenceError(format!("Failed to sync: {}", e))
            })?;
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::PersistenceError(format!(
                "Failed to rename: {}",
                e
            )));
        }

        crate::debug!("Bangs persisted successfully");
        Ok(())
    }

    async fn read(&self) -> Result<Option<BangTable>, StorageError> {
        crate::debug!("Loading bangs from {:?}", self.path);

        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::debug!("No bangs file found");
                return Ok(None);
            }
            Err(e) => return Err(StorageError::LoadError(e.to_string())),
        };

        let table: BangTable = serde_json::from_slice(&content)
            .map_err(|e| StorageError::LoadError(e.to_string()))?;

        crate::info!("Loaded {} bangs from storage", table.len());
        Ok(Some(table))
    }
}

/// In-memory storage, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryBangStorage {
    table: Mutex<Option<BangTable>>,
}

impl MemoryBangStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: BangTable) -> Self {
        Self {
            table: Mutex::new(Some(table)),
        }
    }

    /// Current stored table, if any
    pub fn snapshot(&self) -> Option<BangTable> {
        self.table.lock().clone()
    }
}

#[async_trait]
impl BangStorage for MemoryBangStorage {
    async fn save(&self, table: &BangTable) -> Result<(), StorageError> {
        *self.table.lock() = Some(table.clone());
        Ok(())
    }

    async fn read(&self) -> Result<Option<BangTable>, StorageError> {
        Ok(self.table.lock().clone())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
