//! Startup root folder initialization.

use tracing::{info, warn};

use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_database::FolderStore;
use foldertree_entity::folder::{CreateFolder, Folder};

/// Makes sure a parentless root folder exists and returns it.
///
/// Idempotent. When another process creates the root between our lookup
/// and our insert, the store reports a conflict and the winner's root is
/// returned instead.
pub async fn ensure_root(store: &dyn FolderStore) -> AppResult<Folder> {
    if let Some(root) = store.find_root().await? {
        return Ok(root);
    }

    match store.create(&CreateFolder::root()).await {
        Ok(root) => {
            info!(folder_id = %root.id, name = %root.name, "Default root folder created");
            Ok(root)
        }
        Err(e) if e.is(ErrorKind::Conflict) => {
            warn!("Root folder was created concurrently, using existing root");
            store
                .find_root()
                .await?
                .ok_or_else(|| AppError::internal("Root folder conflict but no root found"))
        }
        Err(e) => Err(e),
    }
}
