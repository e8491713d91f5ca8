//! In-memory folder store.
//!
//! Keeps records in insertion order, which doubles as creation order.
//! Used by tests and for running the API without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Folder store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    folders: RwLock<Vec<Folder>>,
}

impl MemoryFolderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records, kept in order.
    ///
    /// No invariants are checked; this is how dangling or cyclic data
    /// written by other tools can be reproduced.
    pub fn with_folders(folders: Vec<Folder>) -> Self {
        Self {
            folders: RwLock::new(folders),
        }
    }

    /// Number of stored folders.
    pub async fn len(&self) -> usize {
        self.folders.read().await.len()
    }

    /// Whether the store holds no folders.
    pub async fn is_empty(&self) -> bool {
        self.folders.read().await.is_empty()
    }
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Ok(self.folders.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        Ok(self
            .folders
            .read()
            .await
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn find_by_parent_id(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        Ok(self
            .folders
            .read()
            .await
            .iter()
            .filter(|f| f.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn find_root(&self) -> AppResult<Option<Folder>> {
        Ok(self
            .folders
            .read()
            .await
            .iter()
            .find(|f| f.parent_id.is_none())
            .cloned())
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut folders = self.folders.write().await;

        if data.parent_id.is_none() && folders.iter().any(|f| f.parent_id.is_none()) {
            return Err(AppError::conflict("A root folder already exists"));
        }

        let now = Utc::now();
        let folder = Folder {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            parent_id: data.parent_id,
            is_root: data.is_root(),
            created_at: now,
            updated_at: now,
        };
        folders.push(folder.clone());
        Ok(folder)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let mut folders = self.folders.write().await;
        let before = folders.len();
        folders.retain(|f| f.id != id);
        Ok(folders.len() < before)
    }
}
