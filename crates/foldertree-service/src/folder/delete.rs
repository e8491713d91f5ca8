//! Children-first subtree deletion.

use std::collections::HashSet;

use tracing::{debug, info};
use uuid::Uuid;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_database::FolderStore;

enum Visit {
    Enter(Uuid),
    Leave(Uuid),
}

/// Deletes a folder and every folder below it.
///
/// The target must exist (`NotFound`) and must have a parent
/// (`Forbidden`). Folders are removed in post-order, so a folder is never
/// deleted while one of its descendants is still stored. A store error
/// stops the traversal immediately; whatever was already deleted stays
/// deleted.
///
/// Returns the number of records removed.
pub async fn delete_subtree(store: &dyn FolderStore, id: Uuid) -> AppResult<u64> {
    let folder = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Folder not found"))?;

    if folder.is_root() {
        return Err(AppError::forbidden("Cannot delete root folder"));
    }

    let mut deleted = 0u64;
    let mut seen = HashSet::new();
    let mut stack = vec![Visit::Enter(id)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(current) => {
                if !seen.insert(current) {
                    continue;
                }
                stack.push(Visit::Leave(current));
                let children = store.find_by_parent_id(current).await?;
                // Reversed so the first-created child is visited first.
                stack.extend(children.iter().rev().map(|c| Visit::Enter(c.id)));
            }
            Visit::Leave(current) => {
                if store.delete_by_id(current).await? {
                    deleted += 1;
                } else {
                    debug!(folder_id = %current, "Folder already gone during subtree delete");
                }
            }
        }
    }

    info!(folder_id = %id, name = %folder.name, deleted, "Subtree deleted");
    Ok(deleted)
}
