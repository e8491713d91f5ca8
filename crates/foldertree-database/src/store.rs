//! Folder store trait.

use async_trait::async_trait;
use uuid::Uuid;

use foldertree_core::result::AppResult;
use foldertree_entity::folder::{CreateFolder, Folder};

/// Persistence of flat folder records.
///
/// The store knows nothing about trees: it has no cascade delete and no
/// child lists. Implementations exist for PostgreSQL
/// ([`FolderRepository`](crate::repositories::FolderRepository)) and for
/// process memory ([`MemoryFolderStore`](crate::memory::MemoryFolderStore)).
///
/// A store must reject a second folder without a parent with a
/// `Conflict` error.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// All folders in ascending creation order.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// Find a folder by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>>;

    /// Direct children of a folder, in creation order.
    async fn find_by_parent_id(&self, parent_id: Uuid) -> AppResult<Vec<Folder>>;

    /// The folder with no parent, if any.
    async fn find_root(&self) -> AppResult<Option<Folder>>;

    /// Insert a new folder and return the stored record.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Delete a single folder. Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;
}
