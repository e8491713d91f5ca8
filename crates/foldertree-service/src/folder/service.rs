//! Folder operations exposed to the API layer.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use foldertree_core::config::FolderConfig;
use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_database::FolderStore;
use foldertree_entity::folder::{CreateFolder, Folder, FolderNode};

use super::delete::delete_subtree;
use super::root::ensure_root;
use super::tree::build_tree;

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name, untrimmed.
    pub name: String,
    /// Parent folder ID (None for a parentless folder).
    pub parent_id: Option<Uuid>,
}

/// Orchestrates tree reads, creation, and subtree deletion over a store.
#[derive(Debug, Clone)]
pub struct FolderService {
    store: Arc<dyn FolderStore>,
    config: FolderConfig,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn FolderStore>, config: FolderConfig) -> Self {
        Self { store, config }
    }

    /// Creates the root folder if none exists yet.
    pub async fn ensure_root(&self) -> AppResult<Folder> {
        ensure_root(self.store.as_ref()).await
    }

    /// Reads every folder and nests them into a forest.
    pub async fn get_tree(&self) -> AppResult<Vec<FolderNode>> {
        let folders = self.store.find_all().await?;
        Ok(build_tree(&folders, self.config.max_depth))
    }

    /// Creates a folder, checking the name and the parent first.
    pub async fn create_folder(&self, req: CreateFolderRequest) -> AppResult<Folder> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }

        if let Some(parent_id) = req.parent_id {
            let parent = self
                .store
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;

            if self.depth_of(&parent).await? >= self.config.max_depth {
                return Err(AppError::validation(format!(
                    "Folders cannot be nested more than {} levels deep",
                    self.config.max_depth
                )));
            }
        }

        let folder = self
            .store
            .create(&CreateFolder {
                name: name.to_string(),
                parent_id: req.parent_id,
            })
            .await?;

        info!(
            folder_id = %folder.id,
            parent_id = ?folder.parent_id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Deletes a non-root folder and its whole subtree.
    pub async fn delete_folder(&self, folder_id: Uuid) -> AppResult<u64> {
        delete_subtree(self.store.as_ref(), folder_id).await
    }

    /// Number of ancestors above `folder`, counted up to one past the limit.
    ///
    /// The walk stops at a missing ancestor, and the bound keeps a parent
    /// cycle from looping.
    async fn depth_of(&self, folder: &Folder) -> AppResult<usize> {
        let mut depth = 0;
        let mut next = folder.parent_id;
        while let Some(id) = next {
            depth += 1;
            if depth > self.config.max_depth {
                break;
            }
            next = match self.store.find_by_id(id).await? {
                Some(ancestor) => ancestor.parent_id,
                None => break,
            };
        }
        Ok(depth)
    }
}
