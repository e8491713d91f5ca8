//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use foldertree_core::error::{AppError, ErrorKind};
use foldertree_core::result::AppResult;
use foldertree_entity::folder::{CreateFolder, Folder};

use crate::store::FolderStore;

/// Name of the partial unique index allowing a single parentless folder.
const SINGLE_ROOT_INDEX: &str = "folders_single_root";

const FOLDER_COLUMNS: &str = "id, name, parent_id, is_root, created_at, updated_at";

/// PostgreSQL-backed folder store.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders ORDER BY created_at ASC, seq ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_by_parent_id(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent_id = $1 \
             ORDER BY created_at ASC, seq ASC"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn find_root(&self) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent_id IS NULL \
             ORDER BY created_at ASC, seq ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find root folder", e))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (name, parent_id, is_root) VALUES ($1, $2, $3) \
             RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(data.is_root())
        .fetch_one(&self.pool)
        .await
        .map_err(create_error)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Maps an insert failure; a hit on the single-root index is a conflict.
fn create_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(SINGLE_ROOT_INDEX) => {
            AppError::conflict("A root folder already exists")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", err),
    }
}
